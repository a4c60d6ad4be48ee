//! # Headless Settling
//!
//! Runs the engine against the terminal header geometry at a fixed width
//! without touching the terminal. Backs the `--simulate` flag.

use serde::Serialize;

use crate::core::action::NavEvent;
use crate::core::config::ResolvedConfig;
use crate::core::engine::PriorityNav;
use crate::core::layout::NavSnapshot;
use crate::core::measure::MeasureError;
use crate::tui::host::TerminalHost;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub width: u16,
    pub threshold: f64,
    pub events: Vec<NavEvent>,
    pub layout: NavSnapshot,
}

pub fn simulate(config: &ResolvedConfig, width: u16) -> Result<SimulationReport, MeasureError> {
    let mut nav = PriorityNav::new(config.items.clone(), config.options.clone());
    let host = TerminalHost {
        width,
        logo: &config.logo,
        toggle_icon: &config.toggle_icon,
    };
    let events = nav.recalc(&host)?;
    Ok(SimulationReport {
        width,
        threshold: config.options.threshold,
        events,
        layout: nav.layout().snapshot(),
    })
}
