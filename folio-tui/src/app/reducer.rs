//! Pure reducer function for state transitions
//!
//! The reducer is `(State, Action) -> State` with no side effects: no
//! network, no file IO, no clock reads. Instants arrive inside actions
//! (`Action::Tick`) and key-driven transitions reuse the last tick's
//! instant. State is threaded by ownership rather than cloned because
//! the overlay controller owns an RAII scroll lock.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use libfolio::overlay::OverlayEffect;
use ratatui::layout::Rect;

use super::actions::{Action, ContactField, Section};
use super::state::AppState;
use crate::ui;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. All business
/// logic with side effects (delivery, terminal IO) happens outside and
/// feeds results back in as actions.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => return handle_key(state, key),

        Action::Mouse(mouse) => {
            // A press outside the expanded overlay dismisses it
            if state.overlay.is_open()
                && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            {
                let area = Rect::new(0, 0, state.term_size.0, state.term_size.1);
                let popup = ui::overlay::overlay_rect(area);
                let inside = mouse.column >= popup.x
                    && mouse.column < popup.x + popup.width
                    && mouse.row >= popup.y
                    && mouse.row < popup.y + popup.height;
                if !inside {
                    return reduce(state, Action::OverlayDismissed);
                }
            }
        }

        Action::Tick(now) => {
            state.last_tick = now;
            // The hero is on screen from the first frame; the first tick
            // delivers its visibility signal (a later tick is a no-op)
            state.hero.mark_visible(now);
            let _ = state.hero.poll(now);
            let _ = state.carousel.poll(now);
        }

        Action::Resize(w, h) => {
            state.term_size = (w, h);
        }

        // === Navigation ===
        Action::NavigateTo(section) => {
            if state.overlay.is_open() {
                let effects = state.overlay.close();
                apply_overlay_effects(&mut state, effects);
            }
            state.section = section;
            state.scroll = 0;
        }

        Action::Quit => {
            state.should_quit = true;
        }

        Action::ShowHelp => {
            state.help_visible = true;
        }

        Action::HideHelp => {
            state.help_visible = false;
        }

        Action::ScrollBy(delta) => {
            // The page under an open overlay does not scroll
            if !state.overlay.scroll_locked() {
                state.scroll = if delta < 0 {
                    state.scroll.saturating_sub(delta.unsigned_abs())
                } else {
                    state.scroll.saturating_add(delta as u16)
                };
            }
        }

        // === Project Overlay ===
        Action::SelectProject(delta) => {
            let count = state.content.projects.len();
            if count == 0 {
                return state;
            }
            let current = state.selected_project.min(count - 1) as i32;
            let next = (current + delta as i32).rem_euclid(count as i32) as usize;
            state.selected_project = next;
            // With the overlay open, moving the selection switches the
            // expanded project directly
            if state.overlay.is_open() {
                return reduce(state, Action::ProjectActivated(next));
            }
        }

        Action::ProjectActivated(index) => {
            let Some(entry) = state.content.projects.get(index) else {
                return state;
            };
            state.selected_project = index;
            let effects = state.overlay.open(entry);
            apply_overlay_effects(&mut state, effects);
        }

        Action::OverlayDismissed => {
            let effects = state.overlay.close();
            apply_overlay_effects(&mut state, effects);
        }

        // === Contact Form ===
        Action::ContactFocusNext => {
            state.contact.focus = state.contact.focus.next();
        }

        Action::ContactFocusPrev => {
            state.contact.focus = state.contact.focus.prev();
        }

        Action::ContactFieldChanged { field, value } => {
            let fields = state.contact.gate.fields_mut();
            match field {
                ContactField::Name => fields.sender_name = value,
                ContactField::Email => fields.sender_email = value,
                ContactField::Message => fields.message = value,
            }
        }

        Action::ContactSubmitRequested => {
            // Submission is started outside the reducer; the gate
            // transition happens there and results come back as
            // ContactDelivery* actions
        }

        Action::ContactDeliverySucceeded { id } => {
            state.contact.gate.resolve_success(id);
        }

        Action::ContactDeliveryFailed { id, error } => {
            state.contact.gate.resolve_failure(id, &error);
        }

        // === Error Handling ===
        Action::ShowError(error) => {
            state.error = Some(error);
        }

        Action::DismissError => {
            state.error = None;
        }
    }

    state
}

/// Run overlay effects against the carousel
///
/// The strip is re-measured from the freshly opened entry each time;
/// measurements never persist across overlay sessions.
fn apply_overlay_effects(state: &mut AppState, effects: Vec<OverlayEffect>) {
    let now = state.last_tick;
    for effect in effects {
        match effect {
            OverlayEffect::StartCarousel => {
                let width = state
                    .overlay
                    .active_id()
                    .and_then(|id| state.content.project(id))
                    .map(ui::overlay::strip_width)
                    .unwrap_or(0);
                state.carousel.activate(width, now);
            }
            OverlayEffect::StopCarousel => {
                state.carousel.deactivate();
            }
        }
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are
/// defined. Text input for the contact form never reaches here; the
/// event loop feeds it to the textareas and dispatches
/// `ContactFieldChanged` instead.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Section cycling that also works while typing in the form
        (KeyCode::Left, KeyModifiers::CONTROL) => {
            let target = state.section.prev();
            return reduce(state, Action::NavigateTo(target));
        }
        (KeyCode::Right, KeyModifiers::CONTROL) => {
            let target = state.section.next();
            return reduce(state, Action::NavigateTo(target));
        }

        // Dismiss error
        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        // Close the expanded project
        (KeyCode::Esc, _) if state.overlay.is_open() => {
            return reduce(state, Action::OverlayDismissed);
        }

        _ => {}
    }

    // Direct section jumps (not while the form captures digits)
    if state.section != Section::Contact && !state.modal_open() {
        if let KeyCode::Char(c @ '1'..='5') = key.code {
            let index = (c as usize) - ('1' as usize);
            return reduce(state, Action::NavigateTo(Section::ALL[index]));
        }
        match key.code {
            KeyCode::Left => {
                let target = state.section.prev();
                return reduce(state, Action::NavigateTo(target));
            }
            KeyCode::Right => {
                let target = state.section.next();
                return reduce(state, Action::NavigateTo(target));
            }
            _ => {}
        }
    }

    // Section-specific keybindings
    match state.section {
        Section::Projects => handle_projects_key(state, key),
        Section::Contact => handle_contact_key(state, key),
        Section::Hero | Section::About | Section::Experience => {
            handle_scroll_key(state, key)
        }
    }
}

/// Project list and expanded overlay keys
fn handle_projects_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    if state.overlay.is_open() {
        return match key.code {
            // Switch the expanded project in place
            KeyCode::Up | KeyCode::Left => reduce(state, Action::SelectProject(-1)),
            KeyCode::Down | KeyCode::Right => reduce(state, Action::SelectProject(1)),
            KeyCode::Char('x') => reduce(state, Action::OverlayDismissed),
            _ => state,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::SelectProject(-1)),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::SelectProject(1)),
        KeyCode::Enter => {
            let index = state.selected_project;
            reduce(state, Action::ProjectActivated(index))
        }
        _ => state,
    }
}

/// Contact form keys that are not text input
fn handle_contact_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => reduce(state, Action::ContactFocusNext),
        (KeyCode::BackTab, _) => reduce(state, Action::ContactFocusPrev),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) if state.contact.gate.can_submit() => {
            reduce(state, Action::ContactSubmitRequested)
        }
        _ => state,
    }
}

/// Body scrolling for the text sections
fn handle_scroll_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::ScrollBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::ScrollBy(1)),
        KeyCode::PageUp => reduce(state, Action::ScrollBy(-10)),
        KeyCode::PageDown => reduce(state, Action::ScrollBy(10)),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};
    use libfolio::contact::SubmissionStatus;
    use libfolio::content::PortfolioContent;
    use std::time::{Duration, Instant};

    fn state() -> AppState {
        let content = PortfolioContent::builtin().unwrap();
        AppState::new(content, Instant::now())
    }

    fn key(code: KeyCode) -> Action {
        Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_action() {
        let state = reduce(state(), Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_q_quits() {
        let state = reduce(state(), key(KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut state = state();
        state.section = Section::About;
        state.scroll = 7;

        let state = reduce(state, Action::NavigateTo(Section::Experience));
        assert_eq!(state.section, Section::Experience);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_overlay_opens_and_starts_carousel() {
        let state = state();
        // Project 0 carries media in the builtin content
        assert!(state.content.projects[0].has_carousel());

        let state = reduce(state, Action::ProjectActivated(0));
        assert!(state.overlay.is_open());
        assert!(state.overlay.scroll_locked());
        assert!(state.carousel.is_active());
    }

    #[test]
    fn test_overlay_close_stops_carousel() {
        let state = reduce(state(), Action::ProjectActivated(0));
        let state = reduce(state, Action::OverlayDismissed);
        assert!(!state.overlay.is_open());
        assert!(!state.carousel.is_active());
    }

    #[test]
    fn test_navigation_away_closes_overlay() {
        let mut state = reduce(state(), Action::ProjectActivated(0));
        state.section = Section::Projects;

        let state = reduce(state, Action::NavigateTo(Section::About));
        assert!(!state.overlay.is_open());
        assert!(!state.carousel.is_active());
    }

    #[test]
    fn test_scroll_locked_while_overlay_open() {
        let mut state = state();
        state.section = Section::About;
        let state = reduce(state, Action::ScrollBy(3));
        assert_eq!(state.scroll, 3);

        let state = reduce(state, Action::ProjectActivated(0));
        let state = reduce(state, Action::ScrollBy(3));
        assert_eq!(state.scroll, 3);

        let state = reduce(state, Action::OverlayDismissed);
        let state = reduce(state, Action::ScrollBy(3));
        assert_eq!(state.scroll, 6);
    }

    #[test]
    fn test_selection_switch_reopens_directly() {
        let mut state = state();
        state.section = Section::Projects;
        let state = reduce(state, Action::ProjectActivated(0));
        let first = state.overlay.active_id().map(str::to_string);

        let state = reduce(state, key(KeyCode::Down));
        assert!(state.overlay.is_open());
        assert_ne!(state.overlay.active_id().map(str::to_string), first);
        assert_eq!(state.selected_project, 1);
    }

    #[test]
    fn test_overlay_for_project_without_media() {
        let state = state();
        let index = state
            .content
            .projects
            .iter()
            .position(|p| !p.has_carousel())
            .unwrap();

        let state = reduce(state, Action::ProjectActivated(index));
        assert!(state.overlay.is_open());
        assert!(!state.carousel.is_active());
    }

    #[test]
    fn test_outside_click_dismisses_overlay() {
        let mut state = reduce(state(), Action::Resize(100, 40));
        state = reduce(state, Action::ProjectActivated(0));
        assert!(state.overlay.is_open());

        // Top-left corner is outside the centered popup
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let state = reduce(state, Action::Mouse(press));
        assert!(!state.overlay.is_open());
    }

    #[test]
    fn test_inside_click_keeps_overlay() {
        let mut state = reduce(state(), Action::Resize(100, 40));
        state = reduce(state, Action::ProjectActivated(0));

        let area = Rect::new(0, 0, 100, 40);
        let popup = ui::overlay::overlay_rect(area);
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: popup.x + 1,
            row: popup.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        let state = reduce(state, Action::Mouse(press));
        assert!(state.overlay.is_open());
    }

    #[test]
    fn test_tick_drives_hero() {
        let start = Instant::now();
        let content = PortfolioContent::builtin().unwrap();
        let mut state = AppState::new(content, start);

        // First tick delivers visibility; a later tick types characters
        state = reduce(state, Action::Tick(start));
        assert_eq!(state.hero.displayed(), "");
        state = reduce(state, Action::Tick(start + Duration::from_secs(2)));
        assert!(!state.hero.displayed().is_empty());
    }

    #[test]
    fn test_contact_field_changes_reach_gate() {
        let state = reduce(
            state(),
            Action::ContactFieldChanged {
                field: ContactField::Email,
                value: "a@b.com".to_string(),
            },
        );
        assert_eq!(state.contact.gate.fields().sender_email, "a@b.com");
    }

    #[test]
    fn test_delivery_results_resolve_the_gate() {
        let mut state = state();
        *state.contact.gate.fields_mut() = libfolio::ContactMessage {
            sender_name: "A".to_string(),
            sender_email: "a@b.com".to_string(),
            message: "hi".to_string(),
        };
        let attempt = state.contact.gate.begin(Instant::now()).unwrap();

        let state = reduce(
            state,
            Action::ContactDeliverySucceeded { id: attempt.id },
        );
        assert_eq!(state.contact.gate.status(), SubmissionStatus::Succeeded);
        assert!(state.contact.gate.fields().sender_name.is_empty());
    }

    #[test]
    fn test_focus_cycles_with_tab() {
        let mut state = state();
        state.section = Section::Contact;
        let state = reduce(state, key(KeyCode::Tab));
        assert_eq!(state.contact.focus, ContactField::Email);
        let state = reduce(state, key(KeyCode::BackTab));
        assert_eq!(state.contact.focus, ContactField::Name);
    }

    #[test]
    fn test_error_overlay_roundtrip() {
        let state = reduce(state(), Action::ShowError("boom".to_string()));
        assert_eq!(state.error.as_deref(), Some("boom"));
        let state = reduce(state, key(KeyCode::Esc));
        assert!(state.error.is_none());
    }
}
