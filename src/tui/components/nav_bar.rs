//! # NavBar Component
//!
//! The header row: logo, the visible navigation items and the kebab
//! toggle. Purely presentational; which items are visible is decided by
//! the engine before rendering.
//!
//! Cells are laid out with the same arithmetic as
//! [`TerminalHost`](crate::tui::host::TerminalHost), so an item the engine
//! considers fitting always fits here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::host::{LOGO_GAP, item_cells, text_cells, toggle_cells};

pub struct NavBar<'a> {
    pub logo: &'a str,
    pub toggle_icon: &'a str,
    /// Visible labels, in document order.
    pub items: Vec<&'a str>,
    pub align_right: bool,
    /// Whether anything sits behind the toggle.
    pub has_hidden: bool,
    pub menu_open: bool,
    /// Where the toggle landed in the last render.
    pub toggle_area: Rect,
}

impl<'a> NavBar<'a> {
    pub fn new(logo: &'a str, toggle_icon: &'a str, items: Vec<&'a str>, align_right: bool) -> Self {
        Self {
            logo,
            toggle_icon,
            items,
            align_right,
            has_hidden: false,
            menu_open: false,
            toggle_area: Rect::default(),
        }
    }

    fn nav_cells(&self) -> u16 {
        self.items
            .iter()
            .map(|label| item_cells(label))
            .fold(toggle_cells(self.toggle_icon), u16::saturating_add)
    }

    fn toggle_style(&self) -> Style {
        let style = if self.has_hidden {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        if self.menu_open {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

/// `width` cells starting at `x`, cut to what is left of `area`.
fn slot(area: Rect, x: u16, width: u16) -> Rect {
    Rect::new(x, area.y, width, 1).intersection(area)
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let logo_cells = text_cells(self.logo);
        frame.render_widget(
            Span::styled(self.logo, Style::default().add_modifier(Modifier::BOLD)),
            slot(area, area.x, logo_cells),
        );

        let after_logo = area.x.saturating_add(logo_cells).saturating_add(LOGO_GAP);
        let mut x = if self.align_right {
            area.right().saturating_sub(self.nav_cells()).max(after_logo)
        } else {
            after_logo
        };

        for label in &self.items {
            let cells = item_cells(label);
            frame.render_widget(Span::raw(format!(" {label} ")), slot(area, x, cells));
            x = x.saturating_add(cells);
        }

        let cells = toggle_cells(self.toggle_icon);
        self.toggle_area = slot(area, x, cells);
        frame.render_widget(
            Span::styled(format!(" {} ", self.toggle_icon), self.toggle_style()),
            self.toggle_area,
        );
    }
}
