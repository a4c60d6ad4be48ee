//! # Terminal Host
//!
//! Answers the engine's measurement questions for a one-row header drawn
//! in terminal cells:
//!
//! ```text
//! │okayNav│ │ Home │ Projects │ Contact │ ⋮ │
//!  logo    gap  items (label + 2 padding)  toggle
//! ```
//!
//! The same geometry is used to draw the header, so what the engine
//! measures is exactly what ends up on screen.

use unicode_width::UnicodeWidthStr;

use crate::core::item::NavItem;
use crate::core::layout::NavLayout;
use crate::core::measure::Measure;

/// Cells between the logo and the first item.
pub const LOGO_GAP: u16 = 1;
/// Horizontal padding around a label, both sides combined.
pub const ITEM_PADDING: u16 = 2;

pub fn text_cells(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

pub fn item_cells(label: &str) -> u16 {
    text_cells(label).saturating_add(ITEM_PADDING)
}

/// The toggle is padded like an item.
pub fn toggle_cells(icon: &str) -> u16 {
    item_cells(icon)
}

pub struct TerminalHost<'a> {
    /// Width of the header row, in cells.
    pub width: u16,
    pub logo: &'a str,
    pub toggle_icon: &'a str,
}

impl TerminalHost<'_> {
    /// Cells taken by the logo, gap, visible items and toggle.
    pub fn children_cells(&self, layout: &NavLayout) -> u32 {
        let items: u32 = layout
            .visible()
            .map(|item| u32::from(item_cells(&item.label)))
            .sum();
        u32::from(text_cells(self.logo))
            + u32::from(LOGO_GAP)
            + items
            + u32::from(toggle_cells(self.toggle_icon))
    }
}

impl Measure for TerminalHost<'_> {
    fn wrapper_width(&self) -> f64 {
        f64::from(self.width)
    }

    fn wrapper_children_width(&self, layout: &NavLayout) -> f64 {
        f64::from(self.children_cells(layout))
    }

    fn item_width(&self, item: &NavItem) -> f64 {
        f64::from(item_cells(&item.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{NavOptions, PriorityNav};
    use crate::core::item::ItemSpec;

    fn host(width: u16) -> TerminalHost<'static> {
        TerminalHost {
            width,
            logo: "Logo",
            toggle_icon: "⋮",
        }
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(text_cells("ab"), 2);
        assert_eq!(text_cells("日本"), 4);
        assert_eq!(item_cells("日本"), 6);
    }

    #[test]
    fn test_children_width_sums_header_parts() {
        let layout = crate::core::layout::NavLayout::new(vec![
            ItemSpec::new("Home"),
            ItemSpec::new("Blog"),
        ]);
        // 4 logo + 1 gap + 6 + 6 + 3 toggle
        assert_eq!(host(80).wrapper_children_width(&layout), 20.0);
    }

    #[test]
    fn test_narrow_terminal_collapses_items() {
        let items = vec![
            ItemSpec::new("Home").with_priority(3),
            ItemSpec::new("Blog").with_priority(1),
            ItemSpec::new("About").with_priority(2),
        ];
        let options = NavOptions {
            threshold: 1.0,
            ..Default::default()
        };
        let mut nav = PriorityNav::new(items, options);

        // Full header is 4 + 1 + 6 + 6 + 7 + 3 = 27 cells.
        nav.recalc(&host(23)).unwrap();
        let visible: Vec<&str> = nav.layout().visible().map(|i| i.label.as_str()).collect();
        assert_eq!(visible, vec!["Home", "About"]);

        nav.recalc(&host(40)).unwrap();
        assert_eq!(nav.layout().invisible_len(), 0);
    }
}
