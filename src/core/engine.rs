//! # Priority Collapse Engine
//!
//! Keeps the visible part of a navigation bar as large as the container
//! allows, hiding the least important items first.
//!
//! ```text
//!  host event (load / resize)
//!          │
//!          ▼
//!     recalc() ──► decide_action() ──► Collapse ──► hide least important visible
//!        ▲                │                          (cache its width first)
//!        │                ├──────────► Expand ────► show most important invisible
//!        │                │                          (drop the cached width)
//!        │                └──────────► Hold ──────► done
//!        └────────────── repeat ◄───────┘
//! ```
//!
//! A width is cached right before an item is hidden because hidden items
//! cannot be measured. The cached widths form a stack whose length always
//! equals the number of invisible items; its top decides when there is
//! room to bring the last hidden item back.
//!
//! One instance owns one navigation bar. Nothing is shared between
//! instances.

use log::{debug, warn};

use crate::core::action::{NavAction, NavEvent, decide};
use crate::core::item::{ItemId, ItemSpec};
use crate::core::layout::NavLayout;
use crate::core::measure::{self, Measure, MeasureError};

/// Default safety buffer, in host units.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NavOptions {
    /// Free space kept in reserve before collapsing. Absorbs rounding and
    /// border noise at exact boundary widths.
    pub threshold: f64,
    /// Presentation only: place the nav and toggle at the right edge.
    pub align_right: bool,
    /// When false, items overflow right to left in document order and
    /// priorities are ignored.
    pub prioritize: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            align_right: true,
            prioritize: true,
        }
    }
}

type Listener = Box<dyn FnMut(&NavEvent)>;

pub struct PriorityNav {
    layout: NavLayout,
    options: NavOptions,
    /// Widths of hidden items at the moment they were hidden, last hidden on top.
    collapsed_widths: Vec<f64>,
    listeners: Vec<Listener>,
}

impl PriorityNav {
    /// Enumerates `items` (document order) with every item visible.
    pub fn new(items: impl IntoIterator<Item = ItemSpec>, options: NavOptions) -> Self {
        let layout = NavLayout::new(items);
        debug!(
            "Priority nav initialized with {} items (threshold {}, prioritize {})",
            layout.len(),
            options.threshold,
            options.prioritize
        );
        Self {
            layout,
            options,
            collapsed_widths: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a callback fired once for every item moved.
    pub fn on_event(&mut self, listener: impl FnMut(&NavEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn layout(&self) -> &NavLayout {
        &self.layout
    }

    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    /// Width cached for the most recently hidden item, if any.
    pub fn last_collapsed_width(&self) -> Option<f64> {
        self.collapsed_widths.last().copied()
    }

    /// Reads the host once and decides what the next step would be.
    pub fn decide_action<M: Measure + ?Sized>(&self, host: &M) -> Result<NavAction, MeasureError> {
        let wrapper = measure::wrapper_width(host)?;
        let children = measure::children_width(host, &self.layout)?;
        let available = wrapper - children - self.options.threshold;
        Ok(decide(available, self.last_collapsed_width()))
    }

    /// Collapses or expands items until the layout is settled and returns
    /// the moves made, in order.
    ///
    /// Safe to call at any time and as often as the host likes: an already
    /// settled layout makes no moves. If the very first reading is invalid
    /// the call fails and nothing changes. If a reading turns invalid after
    /// some moves, those moves are kept and returned.
    ///
    /// All moves of one call go in the same direction; a reversal ends
    /// the call, so one call makes at most one move per item.
    pub fn recalc<M: Measure + ?Sized>(&mut self, host: &M) -> Result<Vec<NavEvent>, MeasureError> {
        let mut events = Vec::new();
        let mut direction = None;

        loop {
            match self.step(host, direction) {
                Ok(Some((action, event))) => {
                    direction = Some(action);
                    self.notify(&event);
                    events.push(event);
                }
                Ok(None) => break,
                Err(err) if events.is_empty() => {
                    warn!("Skipping recalculation: {}", err);
                    return Err(err);
                }
                Err(err) => {
                    warn!("Stopping recalculation after {} moves: {}", events.len(), err);
                    break;
                }
            }
        }

        Ok(events)
    }

    /// One decision plus the move it calls for. `None` once settled, when
    /// no item is eligible, or when the decision reverses `direction`.
    fn step<M: Measure + ?Sized>(
        &mut self,
        host: &M,
        direction: Option<NavAction>,
    ) -> Result<Option<(NavAction, NavEvent)>, MeasureError> {
        let action = self.decide_action(host)?;
        if action != NavAction::Hold && direction.is_some_and(|d| d != action) {
            debug!("Direction reversal to {:?}, stopping", action);
            return Ok(None);
        }
        let event = match action {
            NavAction::Collapse => self.collapse_one(host)?,
            NavAction::Expand => self.expand_one(),
            NavAction::Hold => None,
        };
        Ok(event.map(|event| (action, event)))
    }

    fn collapse_target(&self) -> Option<ItemId> {
        if self.options.prioritize {
            self.layout.least_important_visible()
        } else {
            self.layout.last_visible()
        }
    }

    fn expand_target(&self) -> Option<ItemId> {
        if self.options.prioritize {
            self.layout.most_important_invisible()
        } else {
            self.layout.first_invisible()
        }
    }

    /// Hides one item. `None` when nothing is visible.
    fn collapse_one<M: Measure + ?Sized>(&mut self, host: &M) -> Result<Option<NavEvent>, MeasureError> {
        let Some(item) = self.collapse_target().and_then(|id| self.layout.get(id)) else {
            return Ok(None);
        };
        let id = item.id;
        let width = measure::item_width(host, item)?;
        debug!("Collapsing {} {:?} (priority {}, width {})", id, item.label, item.priority, width);

        self.collapsed_widths.push(width);
        self.layout.hide(id);
        Ok(Some(NavEvent::ItemHidden(id)))
    }

    /// Shows one item. `None` when nothing is hidden.
    fn expand_one(&mut self) -> Option<NavEvent> {
        let id = self.expand_target()?;
        self.collapsed_widths.pop();
        self.layout.show(id);
        debug!("Expanded {}", id);
        Some(NavEvent::ItemDisplayed(id))
    }

    fn notify(&mut self, event: &NavEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for PriorityNav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityNav")
            .field("layout", &self.layout)
            .field("options", &self.options)
            .field("collapsed_widths", &self.collapsed_widths)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Priority;
    use crate::test_support::{ScriptedHost, specs};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn options(threshold: f64) -> NavOptions {
        NavOptions {
            threshold,
            ..Default::default()
        }
    }

    fn assert_invariants(nav: &PriorityNav) {
        let layout = nav.layout();
        let mut ids: Vec<usize> = layout
            .visible()
            .chain(layout.invisible())
            .map(|item| item.id.0)
            .collect();
        ids.sort();
        assert_eq!(ids, (0..layout.len()).collect::<Vec<_>>());
        assert_eq!(nav.collapsed_widths.len(), layout.invisible_len());
    }

    fn hidden_priorities(nav: &PriorityNav, events: &[NavEvent]) -> Vec<Priority> {
        events
            .iter()
            .map(|e| nav.layout().get(e.item()).unwrap().priority)
            .collect()
    }

    #[test]
    fn test_first_collapse_takes_lowest_priority() {
        // Four 100-wide items in a 390 container: one must go.
        let mut nav = PriorityNav::new(specs(&[1, 2, 4, 3]), options(0.0));
        let host = ScriptedHost::new(390.0, 100.0);

        let events = nav.recalc(&host).unwrap();
        assert_eq!(events, vec![NavEvent::ItemHidden(ItemId(0))]);
        assert_invariants(&nav);
    }

    #[test]
    fn test_shrinks_to_two_items_in_priority_order() {
        let mut nav = PriorityNav::new(specs(&[1, 2, 4, 3]), options(20.0));
        let host = ScriptedHost::new(240.0, 100.0);

        let events = nav.recalc(&host).unwrap();
        assert_eq!(hidden_priorities(&nav, &events), vec![Priority(1), Priority(2)]);
        let visible: Vec<ItemId> = nav.layout().visible().map(|i| i.id).collect();
        assert_eq!(visible, vec![ItemId(2), ItemId(3)]);
        assert_eq!(nav.last_collapsed_width(), Some(100.0));
    }

    #[test]
    fn test_expand_picks_highest_invisible_priority() {
        let mut nav = PriorityNav::new(specs(&[2, 3, 9]), options(0.0));
        let host = ScriptedHost::new(150.0, 100.0);
        nav.recalc(&host).unwrap();
        assert_eq!(nav.layout().invisible_len(), 2);

        host.set_wrapper(250.0);
        let events = nav.recalc(&host).unwrap();
        assert_eq!(events, vec![NavEvent::ItemDisplayed(ItemId(1))]);
        assert_invariants(&nav);
    }

    #[test]
    fn test_recalc_is_idempotent() {
        let mut nav = PriorityNav::new(specs(&[1, 2, 4, 3]), options(20.0));
        let host = ScriptedHost::new(240.0, 100.0);

        assert_eq!(nav.recalc(&host).unwrap().len(), 2);
        assert!(nav.recalc(&host).unwrap().is_empty());
        assert!(nav.recalc(&host).unwrap().is_empty());
    }

    #[test]
    fn test_exact_fit_collapses() {
        // available = 300 - 300 - 0 == 0
        let mut nav = PriorityNav::new(specs(&[1, 1, 1]), options(0.0));
        let host = ScriptedHost::new(300.0, 100.0);
        assert_eq!(nav.decide_action(&host), Ok(NavAction::Collapse));
    }

    #[test]
    fn test_empty_nav_is_noop() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut nav = PriorityNav::new(Vec::new(), NavOptions::default());
        nav.on_event(move |_| counter.set(counter.get() + 1));

        let host = ScriptedHost::new(10.0, 100.0).with_base(500.0);
        assert!(nav.recalc(&host).unwrap().is_empty());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_collapse_stops_when_everything_hidden() {
        let mut nav = PriorityNav::new(specs(&[1, 2]), options(0.0));
        // Siblings alone overflow the container.
        let host = ScriptedHost::new(50.0, 10.0).with_base(80.0);

        let events = nav.recalc(&host).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(nav.layout().visible_len(), 0);
        assert!(nav.recalc(&host).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_container_width_leaves_state_unchanged() {
        let mut nav = PriorityNav::new(specs(&[1, 2]), options(0.0));
        for bad in [-1.0, 0.0, f64::NAN] {
            let host = ScriptedHost::new(bad, 100.0);
            assert!(matches!(nav.recalc(&host), Err(MeasureError::WrapperWidth(_))));
        }
        assert_eq!(nav.layout().visible_len(), 2);
        assert_eq!(nav.last_collapsed_width(), None);
    }

    #[test]
    fn test_invalid_item_width_does_not_move_item() {
        let mut nav = PriorityNav::new(specs(&[1, 2]), options(0.0));
        let host = ScriptedHost::new(150.0, 100.0).with_item_width(0, f64::NAN);

        let err = nav.recalc(&host).unwrap_err();
        assert!(matches!(err, MeasureError::ItemWidth { item: ItemId(0), width } if width.is_nan()));
        assert!(nav.layout().is_visible(ItemId(0)));
        assert_invariants(&nav);
    }

    #[test]
    fn test_invalid_reading_mid_settle_keeps_whole_moves() {
        struct Flaky {
            reads: Cell<u32>,
        }
        impl Measure for Flaky {
            fn wrapper_width(&self) -> f64 {
                self.reads.set(self.reads.get() + 1);
                if self.reads.get() > 1 { f64::NAN } else { 100.0 }
            }
            fn wrapper_children_width(&self, layout: &NavLayout) -> f64 {
                layout.visible_len() as f64 * 100.0
            }
            fn item_width(&self, _item: &crate::core::item::NavItem) -> f64 {
                100.0
            }
        }

        let mut nav = PriorityNav::new(specs(&[1, 2, 3]), options(0.0));
        let events = nav.recalc(&Flaky { reads: Cell::new(0) }).unwrap();
        assert_eq!(events, vec![NavEvent::ItemHidden(ItemId(0))]);
        assert_invariants(&nav);
    }

    #[test]
    fn test_listeners_fire_once_per_move() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut nav = PriorityNav::new(specs(&[1, 2, 4, 3]), options(20.0));
        nav.on_event(move |event| sink.borrow_mut().push(*event));

        let host = ScriptedHost::new(240.0, 100.0);
        let events = nav.recalc(&host).unwrap();
        assert_eq!(*seen.borrow(), events);

        host.set_wrapper(1_000.0);
        let events = nav.recalc(&host).unwrap();
        assert_eq!(
            events,
            vec![NavEvent::ItemDisplayed(ItemId(1)), NavEvent::ItemDisplayed(ItemId(0))]
        );
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn test_inconsistent_host_cannot_oscillate() {
        // Items claim 10 wide when measured but the children width says
        // otherwise, so an expand immediately asks for a collapse.
        struct Liar;
        impl Measure for Liar {
            fn wrapper_width(&self) -> f64 {
                200.0
            }
            fn wrapper_children_width(&self, layout: &NavLayout) -> f64 {
                layout.visible_len() as f64 * 150.0
            }
            fn item_width(&self, _item: &crate::core::item::NavItem) -> f64 {
                10.0
            }
        }

        let mut nav = PriorityNav::new(specs(&[1, 2]), options(0.0));
        let first = nav.recalc(&Liar).unwrap();
        assert_eq!(first, vec![NavEvent::ItemHidden(ItemId(0))]);
        let second = nav.recalc(&Liar).unwrap();
        assert_eq!(second, vec![NavEvent::ItemDisplayed(ItemId(0))]);
        assert_invariants(&nav);
    }

    #[test]
    fn test_without_prioritize_overflows_right_to_left() {
        let mut nav = PriorityNav::new(
            specs(&[1, 2, 4, 3]),
            NavOptions {
                threshold: 0.0,
                prioritize: false,
                ..Default::default()
            },
        );
        let host = ScriptedHost::new(250.0, 100.0);

        let events = nav.recalc(&host).unwrap();
        assert_eq!(
            events,
            vec![NavEvent::ItemHidden(ItemId(3)), NavEvent::ItemHidden(ItemId(2))]
        );

        host.set_wrapper(350.0);
        let events = nav.recalc(&host).unwrap();
        assert_eq!(events, vec![NavEvent::ItemDisplayed(ItemId(2))]);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = PriorityNav::new(specs(&[1, 2]), options(0.0));
        let b = PriorityNav::new(specs(&[1, 2]), options(0.0));
        a.recalc(&ScriptedHost::new(150.0, 100.0)).unwrap();
        assert_eq!(a.layout().invisible_len(), 1);
        assert_eq!(b.layout().invisible_len(), 0);
    }
}
