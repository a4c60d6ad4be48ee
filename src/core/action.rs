//! # Actions
//!
//! Every recalculation step boils down to one `NavAction`, decided from
//! two numbers: the free space left in the container and the width of
//! the item collapsed most recently.
//!
//! ```text
//! available = wrapper - children - threshold
//!
//! available <= 0                     → Collapse
//! available >  last collapsed width  → Expand
//! otherwise                          → Hold
//! ```
//!
//! `decide()` is pure so the thresholds can be tested without a host.

use serde::Serialize;

use crate::core::item::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Move one item from visible to invisible.
    Collapse,
    /// Move one item from invisible back to visible.
    Expand,
    /// Layout is settled.
    Hold,
}

/// Maps the free space to an action.
///
/// With nothing collapsed (`last_collapsed_width == None`) there is
/// nothing to expand, so positive space always holds.
pub fn decide(available: f64, last_collapsed_width: Option<f64>) -> NavAction {
    if available <= 0.0 {
        NavAction::Collapse
    } else {
        match last_collapsed_width {
            Some(width) if available > width => NavAction::Expand,
            _ => NavAction::Hold,
        }
    }
}

/// Notification fired once per item move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "item", rename_all = "snake_case")]
pub enum NavEvent {
    ItemHidden(ItemId),
    ItemDisplayed(ItemId),
}

impl NavEvent {
    pub fn item(&self) -> ItemId {
        match self {
            NavEvent::ItemHidden(id) | NavEvent::ItemDisplayed(id) => *id,
        }
    }
}
