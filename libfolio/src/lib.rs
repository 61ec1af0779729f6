//! Folio - a single-page portfolio for the terminal
//!
//! This library provides the portfolio data model and the state machines
//! that drive the interactive pieces: the hero typewriter, the project
//! media carousel, the expanded-project overlay, and the contact form
//! submission gate. The TUI binary owns rendering and the event loop;
//! everything here is deterministic and driven by explicit instants.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod typewriter;

// Re-export commonly used types
pub use config::Config;
pub use contact::{ContactMessage, SubmissionGate, SubmissionStatus};
pub use content::{PortfolioContent, ProjectEntry, ProjectLinks};
pub use error::{FolioError, Result};
pub use overlay::OverlayController;
pub use typewriter::{TypingSequencer, TypingSpec};
