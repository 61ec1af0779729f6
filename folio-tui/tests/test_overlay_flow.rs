//! Test the expanded-project overlay lifecycle through the reducer
//!
//! Exercises overlay exclusivity, the scroll lock, and the carousel
//! activation tied to the overlay.

use std::time::{Duration, Instant};

use folio_tui::app::{reduce, Action, AppState, Section};
use libfolio::content::PortfolioContent;

fn boot(now: Instant) -> AppState {
    let content = PortfolioContent::builtin().unwrap();
    AppState::new(content, now)
}

fn media_project(state: &AppState) -> usize {
    state
        .content
        .projects
        .iter()
        .position(|p| p.has_carousel())
        .unwrap()
}

#[test]
fn test_expand_holds_scroll_lock_while_open() {
    let state = boot(Instant::now());
    assert!(!state.overlay.scroll_locked());

    let state = reduce(state, Action::ProjectActivated(0));
    assert!(state.overlay.scroll_locked());

    let state = reduce(state, Action::OverlayDismissed);
    assert!(!state.overlay.scroll_locked());
}

#[test]
fn test_only_one_project_expanded_at_a_time() {
    let state = reduce(boot(Instant::now()), Action::ProjectActivated(0));
    let first = state.overlay.active_id().unwrap().to_string();

    let state = reduce(state, Action::ProjectActivated(1));
    let second = state.overlay.active_id().unwrap().to_string();

    assert_ne!(first, second);
    assert!(state.overlay.is_open());
}

#[test]
fn test_carousel_ticks_only_while_overlay_open() {
    let start = Instant::now();
    let mut state = boot(start);
    state = reduce(state, Action::Tick(start));

    let index = media_project(&state);
    state = reduce(state, Action::ProjectActivated(index));
    assert!(state.carousel.is_active());

    // Ticks advance the strip offset
    state = reduce(state, Action::Tick(start + Duration::from_millis(25)));
    assert!(state.carousel.offset() > 0);

    // Closing drops the scroller entirely
    state = reduce(state, Action::OverlayDismissed);
    assert!(!state.carousel.is_active());
    assert_eq!(state.carousel.offset(), 0);
}

#[test]
fn test_switching_projects_restarts_carousel() {
    let start = Instant::now();
    let mut state = boot(start);
    state = reduce(state, Action::Tick(start));

    let index = media_project(&state);
    state = reduce(state, Action::ProjectActivated(index));
    state = reduce(state, Action::Tick(start + Duration::from_millis(100)));
    assert!(state.carousel.offset() > 0);

    // Opening another project re-measures and starts from zero
    let other = (index + 1) % state.content.projects.len();
    state = reduce(state, Action::ProjectActivated(other));
    assert_eq!(state.carousel.offset(), 0);
}

#[test]
fn test_reopening_same_project_is_a_noop() {
    let start = Instant::now();
    let mut state = boot(start);
    state = reduce(state, Action::Tick(start));

    let index = media_project(&state);
    state = reduce(state, Action::ProjectActivated(index));
    state = reduce(state, Action::Tick(start + Duration::from_millis(100)));
    let offset = state.carousel.offset();
    assert!(offset > 0);

    // Re-activating the already open project does not restart the strip
    state = reduce(state, Action::ProjectActivated(index));
    assert_eq!(state.carousel.offset(), offset);
}

#[test]
fn test_overlay_survives_ticks() {
    let start = Instant::now();
    let mut state = boot(start);
    state = reduce(state, Action::ProjectActivated(0));

    for i in 1..50 {
        state = reduce(state, Action::Tick(start + Duration::from_millis(20 * i)));
    }
    assert!(state.overlay.is_open());
    assert!(state.overlay.scroll_locked());
}

#[test]
fn test_navigation_away_releases_everything() {
    let mut state = boot(Instant::now());
    state.section = Section::Projects;
    let index = media_project(&state);
    let state = reduce(state, Action::ProjectActivated(index));

    let state = reduce(state, Action::NavigateTo(Section::Contact));
    assert!(!state.overlay.is_open());
    assert!(!state.overlay.scroll_locked());
    assert!(!state.carousel.is_active());
}
