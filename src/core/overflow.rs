//! # Overflow Menu
//!
//! Open/closed state of the panel behind the kebab toggle. Each transition
//! reports a before/after pair so a host can hook either side of it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEvent {
    BeforeOpen,
    Opened,
    BeforeClose,
    Closed,
}

#[derive(Debug, Default)]
pub struct OverflowMenu {
    open: bool,
}

impl OverflowMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel. Empty when it is already open.
    pub fn open(&mut self) -> Vec<MenuEvent> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        vec![MenuEvent::BeforeOpen, MenuEvent::Opened]
    }

    /// Closes the panel. Empty when it is already closed.
    pub fn close(&mut self) -> Vec<MenuEvent> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![MenuEvent::BeforeClose, MenuEvent::Closed]
    }

    pub fn toggle(&mut self) -> Vec<MenuEvent> {
        if self.open { self.close() } else { self.open() }
    }
}
