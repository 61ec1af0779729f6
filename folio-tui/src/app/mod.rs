//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Side effects (delivery calls, terminal IO, clock reads) live in the
//! event loop; the reducer only computes new state values.

pub mod actions;
pub mod state;
pub mod reducer;
pub mod event;

// Re-export commonly used types
pub use actions::{Action, ContactField, Section};
pub use state::{AppState, ContactState, UiConfig};
pub use reducer::reduce;
