//! Expanded project overlay
//!
//! Renders the modal detail view for the active project, including the
//! auto-scrolling media strip. The strip is drawn twice back to back so
//! the seam between copies is invisible at any offset.

use libfolio::content::ProjectEntry;
use libfolio::ProjectLinks;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use crate::app::AppState;

/// The popup rectangle the overlay occupies
///
/// Also used by the reducer to hit-test outside clicks.
pub fn overlay_rect(area: Rect) -> Rect {
    super::centered_rect(80, 80, area)
}

/// Full doubled width of a project's media strip, in cells
///
/// Each media box takes its configured width plus a one-cell gap; the
/// strip is rendered twice for seamless wraparound. A project without
/// media measures zero, which leaves the scroller unarmed.
pub fn strip_width(project: &ProjectEntry) -> u16 {
    project
        .media
        .iter()
        .map(|m| m.width.saturating_add(1))
        .sum::<u16>()
        .saturating_mul(2)
}

/// Render the expanded project overlay
pub fn render_project_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(project) = state
        .overlay
        .active_id()
        .and_then(|id| state.content.project(id))
    else {
        return;
    };

    let popup_area = overlay_rect(area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", project.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let strip_height = if project.has_carousel() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Category and links
            Constraint::Length(1),            // Technologies
            Constraint::Min(2),               // Details
            Constraint::Length(strip_height), // Media strip
        ])
        .split(inner);

    let mut head_lines = vec![Line::from(Span::styled(
        project.category.as_str(),
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(line) = links_line(&project.links) {
        head_lines.push(line);
    }
    frame.render_widget(Paragraph::new(head_lines), chunks[0]);

    let tech = project
        .technologies
        .iter()
        .flat_map(|t| {
            vec![
                Span::styled(format!("[{t}]"), Style::default().fg(Color::Green)),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(Line::from(tech)), chunks[1]);

    let mut detail_lines = Vec::new();
    for paragraph in &project.details {
        detail_lines.push(Line::from(paragraph.as_str()));
        detail_lines.push(Line::from(""));
    }
    detail_lines.push(Line::from(Span::styled(
        "Esc: close | Up/Down: other projects",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(
        Paragraph::new(detail_lines).wrap(Wrap { trim: false }),
        chunks[2],
    );

    if project.has_carousel() {
        render_media_strip(frame, chunks[3], state, project);
    }
}

/// One line of link affordances, shaped by the link variant
fn links_line(links: &ProjectLinks) -> Option<Line<'_>> {
    match links {
        ProjectLinks::Store {
            app_store,
            play_store,
        } => Some(Line::from(vec![
            Span::styled("App Store ", Style::default().fg(Color::Blue)),
            Span::raw(app_store.as_str()),
            Span::raw("   "),
            Span::styled("Play Store ", Style::default().fg(Color::Blue)),
            Span::raw(play_store.as_str()),
        ])),
        ProjectLinks::CodeAndDemo { repo, demo } => Some(Line::from(vec![
            Span::styled("Code ", Style::default().fg(Color::Blue)),
            Span::raw(repo.as_str()),
            Span::raw("   "),
            Span::styled("Demo ", Style::default().fg(Color::Blue)),
            Span::raw(demo.as_str()),
        ])),
        ProjectLinks::None => None,
    }
}

/// Render the auto-scrolling media strip
///
/// The caption row is built for both copies of the strip, then a window
/// the width of the render area is cut starting at the scroller offset.
/// Because the offset never reaches the width of one copy, the window
/// always shows a continuous run.
fn render_media_strip(frame: &mut Frame, area: Rect, state: &AppState, project: &ProjectEntry) {
    let mut row = String::new();
    for _ in 0..2 {
        for media in &project.media {
            let inner = (media.width as usize).saturating_sub(2);
            // Truncate on char boundaries; captions are not all ASCII
            let caption: String = media.caption.chars().take(inner).collect();
            row.push_str(&format!("[{caption:^inner$}]"));
            row.push(' ');
        }
    }

    let offset = state.carousel.offset() as usize;
    let window: String = row
        .chars()
        .cycle()
        .skip(offset)
        .take(area.width as usize)
        .collect();

    let strip = Paragraph::new(window).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(strip, area);
}
