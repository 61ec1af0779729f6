//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects; animation state lives in the
//! machines the reducer advances on ticks.

pub mod contact;
pub mod overlay;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use crate::app::{AppState, Section};
use contact::ContactForm;

/// Render the application UI
///
/// The page is a single column: hero banner, section tabs, section
/// body, footer. Overlays stack on top in fixed order so the error
/// overlay always wins.
pub fn render(frame: &mut Frame, state: &AppState, form: &ContactForm) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Hero banner
            Constraint::Length(1), // Section tabs
            Constraint::Min(3),    // Section body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_hero(frame, chunks[0], state);
    render_tabs(frame, chunks[1], state);

    match state.section {
        Section::Hero | Section::About => render_about(frame, chunks[2], state),
        Section::Experience => render_experience(frame, chunks[2], state),
        Section::Projects => render_projects(frame, chunks[2], state),
        Section::Contact => contact::render_contact(frame, chunks[2], state, form),
    }

    render_footer(frame, chunks[3], state);

    // Overlays, back to front
    if state.overlay.is_open() {
        overlay::render_project_overlay(frame, area, state);
    }
    if state.help_visible {
        render_help_overlay(frame, area);
    }
    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

/// Render the hero banner with the typewriter intro
fn render_hero(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.content.profile;

    let mut typed_spans = Vec::new();
    let line = state.hero.current_line();
    let line_color = line
        .and_then(|l| l.color.as_deref())
        .and_then(|name| name.parse::<Color>().ok());
    let mut typed_style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(color) = line_color {
        typed_style = typed_style.fg(color);
    } else if line.is_some_and(|l| l.emphasis) {
        // Emphasized lines without an explicit color get the accent
        typed_style = typed_style.fg(Color::Cyan);
    }
    typed_spans.push(Span::styled(state.hero.displayed().to_string(), typed_style));
    if state.hero.cursor_visible(state.last_tick) {
        typed_spans.push(Span::styled(
            state.hero.cursor_char().to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let lines = vec![
        Line::from(typed_spans),
        Line::from(Span::styled(
            profile.headline.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            profile.tagline.as_str(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(
            profile
                .socials
                .iter()
                .flat_map(|s| {
                    vec![
                        Span::styled(s.label.as_str(), Style::default().fg(Color::Cyan)),
                        Span::raw("  "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    ];

    let hero = Paragraph::new(lines)
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);
    frame.render_widget(hero, area);
}

/// Render the section tab bar
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == state.section {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, section.title()), style));
    }

    let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}

/// Render the about section
fn render_about(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::new();
    for paragraph in &state.content.about.paragraphs {
        lines.push(Line::from(paragraph.as_str()));
        lines.push(Line::from(""));
    }

    let about = Paragraph::new(lines)
        .block(Block::default().title(" About ").borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(about, area);
}

/// Render the experience timeline
fn render_experience(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::new();
    for entry in &state.content.experience {
        lines.push(Line::from(vec![
            Span::styled(
                entry.role.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" @ "),
            Span::styled(entry.organization.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            entry.period.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(entry.summary.as_str()));
        if let Some(ref link) = entry.link {
            lines.push(Line::from(Span::styled(
                link.as_str(),
                Style::default().fg(Color::Blue),
            )));
        }
        lines.push(Line::from(""));
    }

    let experience = Paragraph::new(lines)
        .block(Block::default().title(" Experience ").borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(experience, area);
}

/// Render the project list
fn render_projects(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::new();
    for (i, project) in state.content.projects.iter().enumerate() {
        let selected = i == state.selected_project;
        let marker = if selected { "> " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(project.title.as_str(), title_style),
            Span::raw("  "),
            Span::styled(
                project.category.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(format!("    {}", project.summary)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Enter: expand | Up/Down: select",
        Style::default().fg(Color::DarkGray),
    )));

    let projects = Paragraph::new(lines)
        .block(Block::default().title(" Projects ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(projects, area);
}

/// Render the footer line
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            state.content.profile.location.as_str(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  |  "),
        Span::styled(
            "F1: help | q: quit | Ctrl+Left/Right: sections",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q           - Quit"),
        Line::from("  F1          - Toggle help"),
        Line::from("  1-5         - Jump to section"),
        Line::from("  Ctrl+Left   - Previous section"),
        Line::from("  Ctrl+Right  - Next section"),
        Line::from(""),
        Line::from("Projects:"),
        Line::from("  Up/Down     - Select project"),
        Line::from("  Enter       - Expand project"),
        Line::from("  Esc / x     - Close expanded project"),
        Line::from(""),
        Line::from("Contact:"),
        Line::from("  Tab         - Next field"),
        Line::from("  Ctrl+S      - Send message"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(ratatui::widgets::Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(ratatui::widgets::Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
