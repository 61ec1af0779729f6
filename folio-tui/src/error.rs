//! Error types for folio-tui
//!
//! Provides TUI-specific error types that wrap library errors
//! and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (content, config, delivery)
    #[error("Folio error: {0}")]
    Folio(#[from] libfolio::FolioError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl From<libfolio::error::ContentError> for TuiError {
    fn from(err: libfolio::error::ContentError) -> Self {
        TuiError::Folio(err.into())
    }
}

impl From<libfolio::error::ConfigError> for TuiError {
    fn from(err: libfolio::error::ConfigError) -> Self {
        TuiError::Folio(err.into())
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
