//! Contact form rendering
//!
//! The three input fields are stateful tui-textarea widgets owned by
//! the event loop through [`ContactForm`]; everything else (status,
//! send glyph, focus) renders from [`AppState`].

use crossterm::event::KeyEvent;
use libfolio::contact::SubmissionStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_textarea::TextArea;

use crate::app::{AppState, ContactField};

/// Stateful wrapper around the three contact textareas
///
/// Lives in the event loop beside the terminal; the reducer only sees
/// the field values via `ContactFieldChanged` actions.
pub struct ContactForm {
    name: TextArea<'static>,
    email: TextArea<'static>,
    message: TextArea<'static>,
}

impl ContactForm {
    pub fn new() -> Self {
        let mut form = Self {
            name: TextArea::default(),
            email: TextArea::default(),
            message: TextArea::default(),
        };
        form.name.set_placeholder_text("Your name");
        form.email.set_placeholder_text("you@example.com");
        form.message.set_placeholder_text("What would you like to say?");
        form
    }

    fn area(&mut self, field: ContactField) -> &mut TextArea<'static> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Feed a key into the focused field and return its new value
    pub fn input(&mut self, field: ContactField, key: KeyEvent) -> String {
        let area = self.area(field);
        area.input(key);
        area.lines().join("\n")
    }

    /// Current value of a field
    pub fn value(&mut self, field: ContactField) -> String {
        self.area(field).lines().join("\n")
    }

    /// Whether any field holds text
    pub fn is_dirty(&self) -> bool {
        !(self.name.is_empty() && self.email.is_empty() && self.message.is_empty())
    }

    /// Reset all fields (after a successful send)
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Update field borders from focus and submission state
    pub fn sync_style(&mut self, state: &AppState) {
        let pending = state.contact.gate.status() == SubmissionStatus::Pending;
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let focused = state.contact.focus == field;
            let color = if pending {
                Color::Yellow
            } else if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            let block = Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            self.area(field).set_block(block);
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the contact section
pub fn render_contact(frame: &mut Frame, area: Rect, state: &AppState, form: &ContactForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Min(3),    // Message
            Constraint::Length(2), // Status and hints
        ])
        .split(area);

    frame.render_widget(&form.name, chunks[0]);
    frame.render_widget(&form.email, chunks[1]);
    frame.render_widget(&form.message, chunks[2]);

    render_status(frame, chunks[3], state);
}

/// Status line under the form
///
/// While the decorative send glyph is playing it wins over the settled
/// status, mirroring the fixed-duration send animation.
fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let gate = &state.contact.gate;

    let status_line = if gate.glyph_active(state.last_tick) {
        Line::from(Span::styled(
            "Sending your message...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
    } else {
        match gate.status() {
            SubmissionStatus::Idle => Line::from(""),
            SubmissionStatus::Pending => Line::from(Span::styled(
                "Sending your message...",
                Style::default().fg(Color::Yellow),
            )),
            SubmissionStatus::Succeeded => Line::from(Span::styled(
                "Message sent. Thank you!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            SubmissionStatus::Failed => Line::from(Span::styled(
                "Sending failed. Your message is still here; try again.",
                Style::default().fg(Color::Red),
            )),
        }
    };

    let hints = if gate.can_submit() {
        "Tab: next field | Ctrl+S: send"
    } else {
        "Tab: next field"
    };

    let status = Paragraph::new(vec![
        status_line,
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(status, area);
}
