pub mod nav_bar;
pub mod overflow_panel;

pub use nav_bar::NavBar;
pub use overflow_panel::{OverflowPanel, OverflowPanelState};
