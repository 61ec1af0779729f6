//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use std::time::Instant;

use crossterm::event::{KeyEvent, MouseEvent};
use uuid::Uuid;

/// Actions that trigger state transitions
///
/// Actions are immutable data structures that describe what should
/// happen. The reducer (see `reducer.rs`) is responsible for applying
/// actions to state; anything with side effects (delivery, terminal IO)
/// runs in the event loop and feeds results back in as further actions.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Periodic tick for animations, carrying the instant it fired at
    Tick(Instant),

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Jump to a different section of the page
    NavigateTo(Section),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Scroll the section body by a signed number of rows
    ScrollBy(i16),

    // === Project Overlay ===
    /// A project row was activated (by index into the project list)
    ProjectActivated(usize),

    /// Move the project selection by a signed offset
    SelectProject(i16),

    /// Close the expanded project overlay
    OverlayDismissed,

    // === Contact Form ===
    /// Move focus to the next contact field
    ContactFocusNext,

    /// Move focus to the previous contact field
    ContactFocusPrev,

    /// A contact field's content changed
    ContactFieldChanged { field: ContactField, value: String },

    /// User requested a submit (handled outside the reducer)
    ContactSubmitRequested,

    /// The delivery call settled successfully
    ContactDeliverySucceeded { id: Uuid },

    /// The delivery call settled with an error
    ContactDeliveryFailed { id: Uuid, error: String },

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}

/// Page section identifier, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero banner with the typewriter intro
    Hero,

    /// About paragraphs
    About,

    /// Work experience timeline
    Experience,

    /// Project list (rows expand into the overlay)
    Projects,

    /// Contact form
    Contact,
}

impl Section {
    /// Sections in page order, for cycling
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Section {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Contact form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
    }

    #[test]
    fn test_contact_field_cycle() {
        assert_eq!(ContactField::Name.next(), ContactField::Email);
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
    }
}
