//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::HashMap;

use crate::core::item::{ItemSpec, NavItem};
use crate::core::layout::NavLayout;
use crate::core::measure::Measure;

/// Item specs labelled `Item 1..n` with the given priorities.
pub fn specs(priorities: &[i32]) -> Vec<ItemSpec> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| ItemSpec::new(format!("Item {}", i + 1)).with_priority(p))
        .collect()
}

/// A host whose children width is `base + Σ visible item widths`.
pub struct ScriptedHost {
    wrapper: Cell<f64>,
    base: f64,
    default_width: f64,
    overrides: HashMap<usize, f64>,
}

impl ScriptedHost {
    pub fn new(wrapper: f64, item_width: f64) -> Self {
        Self {
            wrapper: Cell::new(wrapper),
            base: 0.0,
            default_width: item_width,
            overrides: HashMap::new(),
        }
    }

    /// Width taken by siblings of the nav (logo, toggle).
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    pub fn with_item_width(mut self, index: usize, width: f64) -> Self {
        self.overrides.insert(index, width);
        self
    }

    /// Simulates a container resize.
    pub fn set_wrapper(&self, width: f64) {
        self.wrapper.set(width);
    }
}

impl Measure for ScriptedHost {
    fn wrapper_width(&self) -> f64 {
        self.wrapper.get()
    }

    /// Broken item overrides count as the default width here, so a bad
    /// item reading surfaces from `item_width` alone.
    fn wrapper_children_width(&self, layout: &NavLayout) -> f64 {
        let sane = |item: &NavItem| {
            Some(self.item_width(item))
                .filter(|w| w.is_finite() && *w >= 0.0)
                .unwrap_or(self.default_width)
        };
        self.base + layout.visible().map(sane).sum::<f64>()
    }

    fn item_width(&self, item: &NavItem) -> f64 {
        self.overrides
            .get(&item.id.0)
            .copied()
            .unwrap_or(self.default_width)
    }
}
