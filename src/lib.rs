//! okayNav library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which edge the navigation and its toggle hug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    pub fn is_right(self) -> bool {
        self == Align::Right
    }
}
