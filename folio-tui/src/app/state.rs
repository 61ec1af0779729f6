//! Application state
//!
//! The single source of truth for the TUI. State transitions happen
//! through the reducer (see `reducer.rs`). The state owns the four
//! interactive machines from libfolio; because the overlay controller
//! holds an RAII scroll lock the state is threaded by ownership through
//! the reducer rather than cloned.

use std::time::{Duration, Instant};

use libfolio::carousel::AutoScroller;
use libfolio::contact::SubmissionGate;
use libfolio::content::PortfolioContent;
use libfolio::overlay::OverlayController;
use libfolio::typewriter::{SpeedRange, TypedLine, TypingSequencer, TypingSpec};

use super::actions::{ContactField, Section};

/// Root application state
#[derive(Debug)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active section
    pub section: Section,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Error overlay state
    pub error: Option<String>,

    /// Vertical scroll of the section body, in rows
    pub scroll: u16,

    /// Last known terminal size
    pub term_size: (u16, u16),

    /// Instant of the most recent tick; used when a key-driven
    /// transition needs a "now" without the reducer reading the clock
    pub last_tick: Instant,

    /// Portfolio content (loaded once at startup)
    pub content: PortfolioContent,

    /// Hero typewriter
    pub hero: TypingSequencer,

    /// Selected row in the project list
    pub selected_project: usize,

    /// Expanded-project overlay
    pub overlay: OverlayController,

    /// Media carousel for the open overlay
    pub carousel: AutoScroller,

    /// Contact form state
    pub contact: ContactState,

    /// UI configuration
    pub config: UiConfig,
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactState {
    /// Submission gate from libfolio
    pub gate: SubmissionGate,

    /// Which field has input focus
    pub focus: ContactField,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let unicode_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("FOLIO_TUI_ASCII").is_err();

        // The carousel advances every 20ms, so the tick must be at
        // least that fine for smooth scrolling
        let tick_rate_ms = std::env::var("FOLIO_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(20);

        Self {
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create application state from loaded content
    pub fn new(content: PortfolioContent, now: Instant) -> Self {
        let hero = TypingSequencer::new(hero_spec(&content), now);

        Self {
            should_quit: false,
            section: Section::Hero,
            help_visible: false,
            error: None,
            scroll: 0,
            term_size: (0, 0),
            last_tick: now,
            content,
            hero,
            selected_project: 0,
            overlay: OverlayController::new(),
            carousel: AutoScroller::default(),
            contact: ContactState::default(),
            config: UiConfig::default(),
        }
    }

    /// The project entry currently under the selection cursor
    pub fn selected_entry(&self) -> Option<&libfolio::ProjectEntry> {
        self.content.projects.get(self.selected_project)
    }

    /// Whether any modal layer is covering the page
    pub fn modal_open(&self) -> bool {
        self.help_visible || self.error.is_some() || self.overlay.is_open()
    }
}

/// Build the hero typewriter spec from the profile intro lines
///
/// Intermediate lines are typed, held, and deleted; the final line (the
/// name) stays on screen. Typing starts once the hero is first rendered.
pub fn hero_spec(content: &PortfolioContent) -> TypingSpec {
    let lines = content
        .profile
        .intro
        .iter()
        .map(|line| {
            let typed = if line.emphasis {
                TypedLine::emphasized(&line.text)
            } else {
                TypedLine::plain(&line.text)
            };
            match &line.color {
                Some(color) => typed.with_color(color),
                None => typed,
            }
        })
        .collect();

    TypingSpec {
        lines,
        typing_speed: Duration::from_millis(75),
        variable_speed: Some(SpeedRange {
            min: Duration::from_millis(40),
            max: Duration::from_millis(110),
        }),
        deleting_speed: Duration::from_millis(45),
        pause: Duration::from_millis(1500),
        initial_delay: Duration::from_millis(400),
        start_on_visible: true,
        ..TypingSpec::default()
    }
}
