//! # Navigation Layout
//!
//! Bookkeeping for which items are visible and which sit behind the
//! overflow toggle.
//!
//! ```text
//! NavLayout
//! ├── items: Vec<NavItem>          // every item, indexed by ItemId
//! ├── visible: Vec<ItemId>         // document order
//! ├── invisible: VecDeque<ItemId>  // most recently collapsed first
//! └── index: PriorityIndex         // ordered priorities of both partitions
//! ```
//!
//! Every item is in exactly one partition. The toggle control is not an
//! item and never appears here.

use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

use crate::core::item::{ItemId, ItemSpec, NavItem, Priority};

/// Ordered priorities of both partitions.
///
/// Visible entries are keyed `(priority, id)`: the first entry is the
/// least important item, ties going to the earliest in document order.
/// Invisible entries are keyed `(priority, seq)` where `seq` grows with
/// every collapse: the last entry is the most important item, ties going
/// to the most recently collapsed one (the front of the invisible list).
#[derive(Debug, Default)]
struct PriorityIndex {
    visible: BTreeSet<(Priority, ItemId)>,
    invisible: BTreeSet<(Priority, u64, ItemId)>,
    /// Collapse sequence number per item, `None` while visible.
    seq: Vec<Option<u64>>,
    next_seq: u64,
}

impl PriorityIndex {
    fn hide(&mut self, item: &NavItem) {
        self.visible.remove(&(item.priority, item.id));
        let seq = self.next_seq;
        self.next_seq += 1;
        self.seq[item.id.0] = Some(seq);
        self.invisible.insert((item.priority, seq, item.id));
    }

    fn show(&mut self, item: &NavItem) {
        if let Some(seq) = self.seq[item.id.0].take() {
            self.invisible.remove(&(item.priority, seq, item.id));
        }
        self.visible.insert((item.priority, item.id));
    }
}

/// The two partitions of the item set.
#[derive(Debug)]
pub struct NavLayout {
    items: Vec<NavItem>,
    visible: Vec<ItemId>,
    invisible: VecDeque<ItemId>,
    index: PriorityIndex,
}

impl NavLayout {
    /// Enumerates the items once, caching their priorities. Everything
    /// starts visible.
    pub fn new(specs: impl IntoIterator<Item = ItemSpec>) -> Self {
        let items: Vec<NavItem> = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| NavItem::from_spec(ItemId(i), spec))
            .collect();

        let index = PriorityIndex {
            visible: items.iter().map(|item| (item.priority, item.id)).collect(),
            invisible: BTreeSet::new(),
            seq: vec![None; items.len()],
            next_seq: 0,
        };

        Self {
            visible: items.iter().map(|item| item.id).collect(),
            invisible: VecDeque::new(),
            items,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&NavItem> {
        self.items.get(id.0)
    }

    /// Visible items in document order.
    pub fn visible(&self) -> impl Iterator<Item = &NavItem> + '_ {
        self.visible.iter().map(|id| &self.items[id.0])
    }

    /// Invisible items, most recently collapsed first.
    pub fn invisible(&self) -> impl Iterator<Item = &NavItem> + '_ {
        self.invisible.iter().map(|id| &self.items[id.0])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn invisible_len(&self) -> usize {
        self.invisible.len()
    }

    pub fn is_visible(&self, id: ItemId) -> bool {
        self.index.seq.get(id.0).is_some_and(Option::is_none)
    }

    /// Lowest-priority visible item; the first in document order on ties.
    pub fn least_important_visible(&self) -> Option<ItemId> {
        self.index.visible.first().map(|&(_, id)| id)
    }

    /// Highest-priority invisible item; the most recently collapsed on ties.
    pub fn most_important_invisible(&self) -> Option<ItemId> {
        self.index.invisible.last().map(|&(_, _, id)| id)
    }

    /// Last visible item in document order.
    pub fn last_visible(&self) -> Option<ItemId> {
        self.visible.last().copied()
    }

    /// Front of the invisible partition.
    pub fn first_invisible(&self) -> Option<ItemId> {
        self.invisible.front().copied()
    }

    /// Moves a visible item to the front of the invisible partition.
    /// Returns false (and changes nothing) if the item is not visible.
    pub(crate) fn hide(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.visible.iter().position(|&v| v == id) else {
            return false;
        };
        self.visible.remove(pos);
        self.invisible.push_front(id);
        self.index.hide(&self.items[id.0]);
        true
    }

    /// Moves an invisible item back to its document-order slot in the
    /// visible partition. Returns false if the item is not invisible.
    pub(crate) fn show(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.invisible.iter().position(|&v| v == id) else {
            return false;
        };
        self.invisible.remove(pos);
        let slot = self.visible.partition_point(|&v| v < id);
        self.visible.insert(slot, id);
        self.index.show(&self.items[id.0]);
        true
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            visible: self.visible().map(|item| item.label.clone()).collect(),
            invisible: self.invisible().map(|item| item.label.clone()).collect(),
        }
    }
}

/// Labels of both partitions, for logging and the headless CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSnapshot {
    pub visible: Vec<String>,
    pub invisible: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::specs;

    fn assert_partitioned(layout: &NavLayout) {
        let mut seen: Vec<usize> = layout
            .visible()
            .chain(layout.invisible())
            .map(|item| item.id.0)
            .collect();
        seen.sort();
        assert_eq!(seen, (0..layout.len()).collect::<Vec<_>>());
        assert_eq!(layout.index.visible.len(), layout.visible_len());
        assert_eq!(layout.index.invisible.len(), layout.invisible_len());
    }

    #[test]
    fn test_new_layout_is_all_visible() {
        let layout = NavLayout::new(specs(&[1, 2, 4, 3]));
        assert_eq!(layout.visible_len(), 4);
        assert_eq!(layout.invisible_len(), 0);
        assert!(layout.most_important_invisible().is_none());
        assert_partitioned(&layout);
    }

    #[test]
    fn test_least_important_visible_breaks_ties_by_document_order() {
        let layout = NavLayout::new(specs(&[3, 1, 2, 1]));
        assert_eq!(layout.least_important_visible(), Some(ItemId(1)));
    }

    #[test]
    fn test_hide_pushes_to_front_of_invisible() {
        let mut layout = NavLayout::new(specs(&[1, 2, 4, 3]));
        assert!(layout.hide(ItemId(0)));
        assert!(layout.hide(ItemId(1)));

        let hidden: Vec<ItemId> = layout.invisible().map(|item| item.id).collect();
        assert_eq!(hidden, vec![ItemId(1), ItemId(0)]);
        assert!(!layout.is_visible(ItemId(0)));
        assert_partitioned(&layout);
    }

    #[test]
    fn test_most_important_invisible_prefers_recent_on_ties() {
        let mut layout = NavLayout::new(specs(&[2, 2, 5]));
        layout.hide(ItemId(0));
        layout.hide(ItemId(1));
        assert_eq!(layout.most_important_invisible(), Some(ItemId(1)));
    }

    #[test]
    fn test_show_restores_document_order() {
        let mut layout = NavLayout::new(specs(&[1, 2, 4, 3]));
        layout.hide(ItemId(1));
        layout.hide(ItemId(0));
        assert!(layout.show(ItemId(1)));

        let visible: Vec<ItemId> = layout.visible().map(|item| item.id).collect();
        assert_eq!(visible, vec![ItemId(1), ItemId(2), ItemId(3)]);
        assert_partitioned(&layout);
    }

    #[test]
    fn test_moves_of_wrong_partition_are_rejected() {
        let mut layout = NavLayout::new(specs(&[1, 2]));
        assert!(!layout.show(ItemId(0)));
        layout.hide(ItemId(0));
        assert!(!layout.hide(ItemId(0)));
        assert!(!layout.hide(ItemId(9)));
        assert_partitioned(&layout);
    }

    #[test]
    fn test_snapshot_lists_labels() {
        let mut layout = NavLayout::new(specs(&[1, 2]));
        layout.hide(ItemId(0));
        let snapshot = layout.snapshot();
        assert_eq!(snapshot.visible, vec!["Item 2"]);
        assert_eq!(snapshot.invisible, vec!["Item 1"]);
    }
}
