//! # Core Navigation Logic
//!
//! The priority collapse engine and the state around it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Layout (partitions)  │
//!                    │  • Action (decisions)   │
//!                    │  • Engine (recalc)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Measure
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │    DOM     │
//!     │   Host     │      │  (--sim)   │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `NavItem`, `Priority`, `ItemSpec`
//! - [`layout`]: `NavLayout`, the visible/invisible partitions
//! - [`measure`]: the `Measure` trait the host implements
//! - [`action`]: `NavAction` and the pure `decide()` function
//! - [`engine`]: `PriorityNav`, the convergence loop
//! - [`overflow`]: open/closed state of the overflow panel
//! - [`debounce`]: coalescing of resize notifications
//! - [`config`]: TOML configuration

pub mod action;
pub mod config;
pub mod debounce;
pub mod engine;
pub mod item;
pub mod layout;
pub mod measure;
pub mod overflow;

// Re-export commonly used types for convenience
pub use action::{NavAction, NavEvent};
pub use engine::{NavOptions, PriorityNav};
pub use item::{ItemId, ItemSpec, NavItem, Priority};
pub use layout::{NavLayout, NavSnapshot};
pub use measure::{Measure, MeasureError};
