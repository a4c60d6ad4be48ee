//! # Host Measurements
//!
//! The engine cannot see the rendered layout; the host answers three
//! questions about it. Units are whatever the host renders in (pixels,
//! terminal cells); the engine only compares them.

use std::fmt;

use crate::core::item::{ItemId, NavItem};
use crate::core::layout::NavLayout;

/// Measurement interface implemented by the host.
pub trait Measure {
    /// Available width of the containing box.
    fn wrapper_width(&self) -> f64;

    /// Total width consumed by the container's direct children (the nav,
    /// its toggle and any siblings) with `layout` as currently partitioned.
    fn wrapper_children_width(&self, layout: &NavLayout) -> f64;

    /// Rendered width of `item`. Only queried while the item is visible.
    fn item_width(&self, item: &NavItem) -> f64;
}

/// A host measurement that cannot be used. The recalculation that read it
/// is skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureError {
    /// Container not laid out: zero, negative or not a number.
    WrapperWidth(f64),
    ChildrenWidth(f64),
    ItemWidth { item: ItemId, width: f64 },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::WrapperWidth(w) => write!(f, "container width unavailable ({w})"),
            MeasureError::ChildrenWidth(w) => write!(f, "invalid children width ({w})"),
            MeasureError::ItemWidth { item, width } => {
                write!(f, "invalid width for item {item} ({width})")
            }
        }
    }
}

impl std::error::Error for MeasureError {}

pub(crate) fn wrapper_width<M: Measure + ?Sized>(host: &M) -> Result<f64, MeasureError> {
    let width = host.wrapper_width();
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(MeasureError::WrapperWidth(width))
    }
}

pub(crate) fn children_width<M: Measure + ?Sized>(
    host: &M,
    layout: &NavLayout,
) -> Result<f64, MeasureError> {
    let width = host.wrapper_children_width(layout);
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(MeasureError::ChildrenWidth(width))
    }
}

pub(crate) fn item_width<M: Measure + ?Sized>(
    host: &M,
    item: &NavItem,
) -> Result<f64, MeasureError> {
    let width = host.item_width(item);
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(MeasureError::ItemWidth {
            item: item.id,
            width,
        })
    }
}
