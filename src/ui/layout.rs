//! Layout components (header, sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::components::Access;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SIDEBAR_WIDTH: u16 = 28;

/// Areas of the workspace screen
pub struct WorkspaceAreas {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
}

/// Split the screen into header, sidebar and main content. The bottom row
/// is left for the status bar.
pub fn create_layout(area: Rect) -> WorkspaceAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[1]);

    WorkspaceAreas {
        header: rows[0],
        sidebar: columns[0],
        main: columns[1],
    }
}

/// Page title and welcome line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        app.config.page_title(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(username) = app.session.username() {
        lines.push(Line::from(Span::styled(
            format!("Welcome, {username}!"),
            Style::default().fg(Color::White),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// One button per component; locked components are dimmed
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let visible = (area.height / BUTTON_HEIGHT) as usize;
    // Keep the active entry on screen
    let first = app
        .state
        .active_component
        .saturating_sub(visible.saturating_sub(1));

    for (slot, (index, component)) in app
        .components
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let button_area = Rect {
            x: area.x,
            y: area.y + slot as u16 * BUTTON_HEIGHT,
            width: area.width,
            height: BUTTON_HEIGHT,
        };
        let granted = app.access(index) == Access::Granted;
        let marker = if component.is_gated() { "🔒" } else { "▪" };
        render_sidebar_button(
            frame,
            button_area,
            marker,
            &component.title,
            index == app.state.active_component,
            granted,
        );
    }
}

/// Key hints and the transient status message on the last row
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let session_marker = if app.session.username().is_some() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(session_marker);

    spans.push(Span::styled(
        app.state.current_view.hints(),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
