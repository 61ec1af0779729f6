//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults from the
//! embedded content document.

use std::time::Instant;

use folio_tui::app::{AppState, Section};
use libfolio::contact::SubmissionStatus;
use libfolio::content::PortfolioContent;

fn boot() -> AppState {
    let content = PortfolioContent::builtin().unwrap();
    AppState::new(content, Instant::now())
}

#[test]
fn test_app_boots_on_hero_section() {
    let state = boot();

    assert_eq!(state.section, Section::Hero);
    assert!(!state.should_quit);
}

#[test]
fn test_no_overlays_on_boot() {
    let state = boot();

    assert!(!state.help_visible);
    assert!(state.error.is_none());
    assert!(!state.overlay.is_open());
    assert!(!state.modal_open());
}

#[test]
fn test_hero_waits_for_first_tick() {
    let state = boot();

    // The typewriter arms on the visibility signal, which the first
    // tick delivers; before that nothing is displayed
    assert_eq!(state.hero.displayed(), "");
    assert!(!state.hero.is_done());
}

#[test]
fn test_carousel_inactive_on_boot() {
    let state = boot();

    assert!(!state.carousel.is_active());
    assert_eq!(state.carousel.offset(), 0);
}

#[test]
fn test_contact_gate_idle_on_boot() {
    let state = boot();

    assert_eq!(state.contact.gate.status(), SubmissionStatus::Idle);
    assert!(state.contact.gate.can_submit());
    assert!(state.contact.gate.fields().sender_name.is_empty());
}

#[test]
fn test_builtin_content_has_projects() {
    let state = boot();

    assert!(!state.content.projects.is_empty());
    assert_eq!(state.selected_project, 0);
    // At least one project drives a carousel, at least one does not
    assert!(state.content.projects.iter().any(|p| p.has_carousel()));
    assert!(state.content.projects.iter().any(|p| !p.has_carousel()));
}

#[test]
fn test_tick_rate_from_env() {
    std::env::set_var("FOLIO_TUI_TICK_MS", "55");
    let state = boot();
    std::env::remove_var("FOLIO_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 55);
}
