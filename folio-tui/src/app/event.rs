//! Event handling infrastructure
//!
//! Polls terminal events with a tick timeout so animations (typewriter,
//! carousel, send glyph) advance even when the keyboard is idle.

use std::time::Duration;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Mouse input
    Mouse(MouseEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick for animations
    Tick,
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration
    ///
    /// A poll timeout produces a Tick, so ticks fire at most tick_rate
    /// apart but are suppressed while input is streaming in.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(TuiEvent::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick), // Ignore other events
            }
        } else {
            // Timeout - generate tick
            Ok(TuiEvent::Tick)
        }
    }
}
