//! # Navigation Items
//!
//! The things the engine moves around. An item never changes after
//! initialization: its identity, label and priority are fixed, only its
//! partition membership (visible / invisible) changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a navigation item: its index in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Importance rank. Lower values are hidden first, higher values come back first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub i32);

impl Priority {
    pub const DEFAULT: Priority = Priority(1);

    /// Reads a priority attribute. Missing, empty or non-numeric values
    /// fall back to [`Priority::DEFAULT`].
    pub fn parse(attr: Option<&str>) -> Self {
        match attr.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse().map(Priority).unwrap_or_else(|_| {
                log::debug!("Ignoring non-numeric priority {:?}", raw);
                Self::DEFAULT
            }),
            None => Self::DEFAULT,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Initialization input for one item, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemSpec {
    pub label: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ItemSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(Priority(priority));
        self
    }

    /// Parses `LABEL` or `LABEL=PRIORITY`, reading the priority the same
    /// way as an attribute.
    pub fn parse(arg: &str) -> Self {
        match arg.rsplit_once('=') {
            Some((label, priority)) => Self {
                label: label.trim().to_string(),
                priority: Some(Priority::parse(Some(priority))),
            },
            None => Self::new(arg.trim()),
        }
    }
}

/// An item as the engine tracks it, with its priority resolved and cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: ItemId,
    pub label: String,
    pub priority: Priority,
}

impl NavItem {
    pub(crate) fn from_spec(id: ItemId, spec: ItemSpec) -> Self {
        Self {
            id,
            label: spec.label,
            priority: spec.priority.unwrap_or_default(),
        }
    }
}
