//! folio-tui - a single-page portfolio for the terminal
//!
//! Renders an interactive portfolio page: a typewriter hero banner,
//! browsable sections, expandable project overlays with auto-scrolling
//! media strips, and a contact form that delivers over HTTP.

use std::path::Path;
use std::time::Instant;

use folio_tui::{
    app::{event::{EventHandler, TuiEvent}, reduce, Action, AppState, Section},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui::{self, contact::ContactForm},
};
use libfolio::config::{resolve_data_path, Config};
use libfolio::contact::DeliveryEvent;
use libfolio::content::PortfolioContent;
use libfolio::logging::LoggingConfig;

fn main() -> Result<()> {
    // Raw mode owns the screen, so logs go to a file under the data dir
    init_file_logging();

    let mut config = Config::load()?;
    config.apply_env_overrides();

    let content = load_content(&config)?;
    let services = ServiceHandle::new(&config)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run the application
    let result = run_app(&mut terminal, content, services);

    // Restore terminal
    restore_terminal(terminal)?;

    result
}

/// Route logs to `<data dir>/folio-tui.log`; silently disabled when the
/// data dir cannot be created
fn init_file_logging() {
    let Ok(data_dir) = resolve_data_path() else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(data_dir.join("folio-tui.log")) else {
        return;
    };
    LoggingConfig::from_env().init_with_writer(std::sync::Mutex::new(file));
}

/// Load content from the configured path, or the embedded document
fn load_content(config: &Config) -> Result<PortfolioContent> {
    let content = match &config.content_path {
        Some(path) => PortfolioContent::load_from_path(Path::new(path))?,
        None => PortfolioContent::builtin()?,
    };
    Ok(content)
}

fn run_app(
    terminal: &mut folio_tui::terminal::Tui,
    content: PortfolioContent,
    services: ServiceHandle,
) -> Result<()> {
    // Initialize application state
    let mut state = AppState::new(content, Instant::now());

    // Stateful contact form widgets
    let mut form = ContactForm::new();

    // Active delivery, if any
    let mut delivery_rx: Option<crossbeam_channel::Receiver<DeliveryEvent>> = None;

    // Create event handler with tick rate from config
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop
    loop {
        // Update form styling before render
        form.sync_style(&state);

        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, &state, &form);
        })?;

        // Handle events
        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => route_key(&state, &mut form, key),
            TuiEvent::Mouse(mouse) => Action::Mouse(mouse),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick(Instant::now()),
        };

        // Update state through reducer
        let submit_requested = matches!(action, Action::ContactSubmitRequested);
        state = reduce(state, action);

        // Check for delivery results
        if let Some(ref rx) = delivery_rx {
            let (drained, settled) = drain_delivery(rx, state, &mut form);
            state = drained;
            if settled {
                delivery_rx = None;
            }
        }

        // Start a submission outside the reducer; results feed back in
        // as ContactDelivery* actions
        if submit_requested {
            match state.contact.gate.begin(Instant::now()) {
                Ok(attempt) => {
                    delivery_rx = Some(services.deliver(attempt));
                }
                Err(e) => {
                    state = reduce(state, Action::ShowError(e.to_string()));
                }
            }
        }

        // Check if we should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Drain settled delivery results into the reducer
///
/// A confirmed success resets the form widgets here, at the same point
/// the gate clears its fields, so anything typed afterwards is never
/// wiped retroactively. Results the gate rejects as stale leave the
/// widgets alone.
fn drain_delivery(
    rx: &crossbeam_channel::Receiver<DeliveryEvent>,
    mut state: AppState,
    form: &mut ContactForm,
) -> (AppState, bool) {
    let mut settled = false;
    while let Ok(event) = rx.try_recv() {
        settled = true;
        let succeeded = matches!(event, DeliveryEvent::Succeeded { .. });
        let action = match event {
            DeliveryEvent::Succeeded { id } => Action::ContactDeliverySucceeded { id },
            DeliveryEvent::Failed { id, error } => Action::ContactDeliveryFailed { id, error },
        };
        state = reduce(state, action);
        if succeeded && state.contact.gate.status() == libfolio::SubmissionStatus::Succeeded {
            form.clear();
        }
    }
    (state, settled)
}

/// Decide whether a key is form input or an application key
///
/// While the contact section is active with no overlay on top, anything
/// that is not a global hotkey goes to the focused textarea and comes
/// back as a field change.
fn route_key(
    state: &AppState,
    form: &mut ContactForm,
    key: crossterm::event::KeyEvent,
) -> Action {
    use crossterm::event::{KeyCode, KeyModifiers};

    let in_contact = state.section == Section::Contact;
    let no_overlay = !state.modal_open();

    let is_global_key = matches!(
        (key.code, key.modifiers),
        (KeyCode::F(_), _)
            | (KeyCode::Esc, _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::Char('s'), KeyModifiers::CONTROL)
            | (KeyCode::Left, KeyModifiers::CONTROL)
            | (KeyCode::Right, KeyModifiers::CONTROL)
    );

    if in_contact && no_overlay && !is_global_key {
        let field = state.contact.focus;
        let value = form.input(field, key);
        Action::ContactFieldChanged { field, value }
    } else if in_contact
        && no_overlay
        && key.code == KeyCode::Char('s')
        && key.modifiers == KeyModifiers::CONTROL
        && state.contact.gate.can_submit()
    {
        Action::ContactSubmitRequested
    } else {
        Action::Key(key)
    }
}
