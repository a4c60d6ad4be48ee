//! # TUI Host
//!
//! The ratatui-specific layer. Draws a header whose navigation collapses
//! into an overflow menu as the terminal narrows, and translates terminal
//! events into engine recalculations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Recalculation Strategy
//!
//! - **Load**: one recalculation before the first frame.
//! - **Resize**: terminal resizes and viewport changes arm a debouncer;
//!   the engine runs once after `resize_delay` of quiet. The poll timeout
//!   shrinks to whatever is left of that delay so the trailing call is not
//!   late.
//! - **Idle**: sleeps up to 500ms, redrawing only on events.

pub mod component;
pub mod components;
pub mod event;
pub mod host;
mod ui;

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::NavEvent;
use crate::core::config::ResolvedConfig;
use crate::core::debounce::ResizeDebouncer;
use crate::core::engine::PriorityNav;
use crate::core::overflow::MenuEvent;
use crate::tui::component::EventHandler;
use crate::tui::components::OverflowPanelState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::host::TerminalHost;

const IDLE_POLL: Duration = Duration::from_millis(500);
const STATUS_HISTORY: usize = 4;

/// TUI presentation state plus the engine it hosts.
pub struct TuiState {
    pub config: ResolvedConfig,
    pub nav: PriorityNav,
    pub panel: OverflowPanelState,
    pub terminal_width: u16,
    /// Demo cap on the header width; `None` uses the full terminal.
    pub viewport: Option<u16>,
    pub debouncer: ResizeDebouncer,
    /// Latest item moves, newest first.
    pub recent: VecDeque<String>,
}

impl TuiState {
    pub fn new(config: ResolvedConfig, terminal_width: u16) -> Self {
        let mut nav = PriorityNav::new(config.items.clone(), config.options.clone());
        nav.on_event(|event| match event {
            NavEvent::ItemHidden(id) => info!("Item hidden: {}", id),
            NavEvent::ItemDisplayed(id) => info!("Item displayed: {}", id),
        });

        Self {
            debouncer: ResizeDebouncer::new(config.resize_delay),
            config,
            nav,
            panel: OverflowPanelState::new(),
            terminal_width,
            viewport: None,
            recent: VecDeque::new(),
        }
    }

    /// Wrapper width handed to the engine.
    pub fn header_width(&self) -> u16 {
        self.viewport
            .map_or(self.terminal_width, |v| v.min(self.terminal_width))
    }

    /// Runs the engine against the current header width.
    pub fn recalc(&mut self) {
        let host = TerminalHost {
            width: self.header_width(),
            logo: &self.config.logo,
            toggle_icon: &self.config.toggle_icon,
        };
        match self.nav.recalc(&host) {
            Ok(events) => {
                for event in events {
                    let line = self.describe(&event);
                    self.recent.push_front(line);
                }
                self.recent.truncate(STATUS_HISTORY);
            }
            Err(e) => {
                warn!("Layout skipped: {}", e);
                self.recent.push_front(format!("Layout skipped: {e}"));
                self.recent.truncate(STATUS_HISTORY);
            }
        }
        debug!("Layout: {:?}", self.nav.layout().snapshot());

        // Nothing left to show behind the toggle.
        if self.nav.layout().invisible_len() == 0 && self.panel.is_open() {
            log_menu_events(&self.panel.close());
        }
    }

    fn describe(&self, event: &NavEvent) -> String {
        let label = self
            .nav
            .layout()
            .get(event.item())
            .map_or("?", |item| item.label.as_str());
        match event {
            NavEvent::ItemHidden(_) => format!("hid {label}"),
            NavEvent::ItemDisplayed(_) => format!("showed {label}"),
        }
    }

    pub fn status_line(&self) -> String {
        if self.recent.is_empty() {
            format!("{} items, all visible", self.nav.layout().len())
        } else {
            self.recent.iter().cloned().collect::<Vec<_>>().join(" · ")
        }
    }

    /// Applies one terminal event. Returns true when the app should quit.
    pub fn handle_event(&mut self, event: TuiEvent, now: Instant) -> bool {
        match event {
            TuiEvent::ForceQuit | TuiEvent::Quit => return true,
            TuiEvent::Resize(width, _) => {
                self.terminal_width = width;
                self.debouncer.trigger(now);
            }
            TuiEvent::ShrinkViewport => {
                self.viewport = Some(self.header_width().saturating_sub(1).max(1));
                self.debouncer.trigger(now);
            }
            TuiEvent::GrowViewport => {
                let grown = self.header_width().saturating_add(1);
                self.viewport = (grown < self.terminal_width).then_some(grown);
                self.debouncer.trigger(now);
            }
            TuiEvent::ResetViewport => {
                self.viewport = None;
                self.debouncer.trigger(now);
            }
            other => match self.panel.handle_event(&other) {
                Some(events) => log_menu_events(&events),
                // Esc with the panel closed
                None if other == TuiEvent::Escape => return true,
                None => {}
            },
        }
        false
    }

    /// Runs the pending recalculation once the resize burst has settled.
    /// Returns true if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.fire(now) {
            self.recalc();
            true
        } else {
            false
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.debouncer.time_left(now).unwrap_or(IDLE_POLL)
    }
}

fn log_menu_events(events: &[MenuEvent]) {
    for event in events {
        debug!("Overflow menu: {:?}", event);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let width = match terminal.size() {
        Ok(size) => size.width,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };
    let mut tui = TuiState::new(config, width);
    info!("Header starts at {} cells", tui.header_width());
    tui.recalc();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(tui.poll_timeout(Instant::now()));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if tui.handle_event(event, Instant::now()) {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break Ok(());
        }

        if tui.tick(Instant::now()) {
            needs_redraw = true;
        }
    };

    ratatui::restore();
    result
}
