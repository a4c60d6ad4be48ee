use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, OverflowPanel};

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [header_row, body_area, status_area] = layout.areas(frame.area());

    // The header only gets the (possibly capped) wrapper width the engine measured.
    let header_area = Rect {
        width: tui.header_width().min(header_row.width),
        ..header_row
    };

    let layout_state = tui.nav.layout();
    let mut bar = NavBar::new(
        &tui.config.logo,
        &tui.config.toggle_icon,
        layout_state.visible().map(|item| item.label.as_str()).collect(),
        tui.nav.options().align_right,
    );
    bar.has_hidden = layout_state.invisible_len() > 0;
    bar.menu_open = tui.panel.is_open();
    bar.render(frame, header_area);
    tui.panel.toggle_area = bar.toggle_area;

    draw_body(frame, body_area, tui);

    let status = Paragraph::new(Span::styled(
        tui.status_line(),
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(status, status_area);

    // Panel last so it draws over the body.
    if tui.panel.is_open() {
        let mut panel = OverflowPanel::new(
            tui.nav.layout().invisible().map(|item| item.label.as_str()).collect(),
            tui.nav.options().align_right,
            tui.panel.toggle_area,
        );
        panel.render(frame, frame.area());
        tui.panel.panel_area = Some(panel.area);
    }
}

fn draw_body(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let layout = tui.nav.layout();
    let describe = |items: Vec<String>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let visible = describe(
        layout
            .visible()
            .map(|item| format!("{} ({})", item.label, item.priority))
            .collect(),
    );
    let hidden = describe(
        layout
            .invisible()
            .map(|item| format!("{} ({})", item.label, item.priority))
            .collect(),
    );

    let lines = vec![
        Line::from(format!(
            "Header width: {} of {} cells",
            tui.header_width(),
            tui.terminal_width
        )),
        Line::from(format!("Visible: {visible}")),
        Line::from(format!("Hidden:  {hidden}")),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ shrink/grow header · 0 reset · m/Tab overflow menu · q quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(Block::bordered().title("Priority")), area);
}
