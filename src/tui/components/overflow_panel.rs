//! # Overflow Panel
//!
//! The dropdown listing the items hidden behind the toggle.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `OverflowPanelState` lives in `TuiState` and owns the open/closed menu
//! - `OverflowPanel` is created each frame with the hidden labels

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, List, ListItem};

use crate::core::overflow::{MenuEvent, OverflowMenu};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::host::text_cells;

/// Persistent state for the overflow panel.
#[derive(Debug, Default)]
pub struct OverflowPanelState {
    pub menu: OverflowMenu,
    /// Toggle position from the last render, for click hit testing.
    pub toggle_area: Rect,
    /// Panel position from the last render, `None` while closed.
    pub panel_area: Option<Rect>,
}

impl OverflowPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn close(&mut self) -> Vec<MenuEvent> {
        self.panel_area = None;
        self.menu.close()
    }
}

impl EventHandler for OverflowPanelState {
    type Event = Vec<MenuEvent>;

    /// Toggle key or click on the toggle flips the panel; Esc or a click
    /// outside the open panel closes it. Anything else is not ours.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Vec<MenuEvent>> {
        match *event {
            TuiEvent::ToggleMenu => Some(self.menu.toggle()),
            TuiEvent::Escape if self.is_open() => Some(self.close()),
            TuiEvent::MouseClick(column, row) => {
                let at = Position::new(column, row);
                if self.toggle_area.contains(at) {
                    Some(self.menu.toggle())
                } else if self.is_open() && !self.panel_area.is_some_and(|panel| panel.contains(at)) {
                    Some(self.close())
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

pub struct OverflowPanel<'a> {
    /// Hidden labels, most recently hidden first.
    pub items: Vec<&'a str>,
    pub align_right: bool,
    /// Toggle position; the panel hangs below it.
    pub anchor: Rect,
    /// Where the panel landed in the last render.
    pub area: Rect,
}

impl<'a> OverflowPanel<'a> {
    pub fn new(items: Vec<&'a str>, align_right: bool, anchor: Rect) -> Self {
        Self {
            items,
            align_right,
            anchor,
            area: Rect::default(),
        }
    }

    fn size(&self) -> (u16, u16) {
        let widest = self.items.iter().map(|label| text_cells(label)).max().unwrap_or(0);
        let width = widest.max(text_cells("(nothing hidden)")).saturating_add(4);
        let height = u16::try_from(self.items.len().max(1)).unwrap_or(u16::MAX).saturating_add(2);
        (width, height)
    }
}

impl Component for OverflowPanel<'_> {
    /// `area` is the space the panel may occupy (usually the whole frame).
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.size();
        let x = if self.align_right {
            self.anchor.right().saturating_sub(width)
        } else {
            self.anchor.x
        };
        self.area = Rect::new(x, self.anchor.bottom(), width, height).intersection(area);

        let items: Vec<ListItem> = if self.items.is_empty() {
            vec![ListItem::new("(nothing hidden)").style(Style::default().add_modifier(Modifier::DIM))]
        } else {
            self.items.iter().map(|label| ListItem::new(format!(" {label}"))).collect()
        };

        frame.render_widget(Clear, self.area);
        frame.render_widget(List::new(items).block(Block::bordered().title("More")), self.area);
    }
}
