//! Main content area: the active component, or why it is hidden

use super::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use super::forms::{draw_form, FormViewOptions};
use crate::app::App;
use crate::components::{Component, Content, Dashboard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(component) = app.active_component() else {
        let empty = Paragraph::new("No components")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let access = app.access(app.state.active_component);
    if let Some(message) = access.denial_message() {
        draw_denied(frame, area, component, message);
        return;
    }

    let area = if component.is_gated() {
        draw_authenticated_banner(frame, area, app)
    } else {
        area
    };

    match &component.content {
        Content::Form(form) => draw_form(
            frame,
            area,
            &component.title,
            form,
            &FormViewOptions {
                show_help: app.config.show_help_text(),
                submit_key: "Ctrl+S",
                echo_values: true,
            },
        ),
        Content::Dashboard(dashboard) => draw_dashboard(frame, area, component, dashboard),
    }
}

/// Block shown in place of gated content
fn draw_denied(frame: &mut Frame, area: Rect, component: &Component, message: &str) {
    let mut lines = vec![Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))];
    let roles = component.required_roles();
    if !roles.is_empty() {
        let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
        lines.push(Line::from(Span::styled(
            format!("Requires role: {}", roles.join(" or ")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let text = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", component.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(text, area);
}

/// "Authenticated as ..." line above gated content; returns the rest
fn draw_authenticated_banner(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let mut spans = vec![Span::styled(
        format!("Authenticated as {}", app.session.roles().join(", ")),
        Style::default().fg(Color::Green),
    )];
    if let (Some(token), Some(since)) = (app.session.token(), app.session.since()) {
        let short: String = token.as_str().chars().take(8).collect();
        spans.push(Span::styled(
            format!("  session {short}… since {}", since.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    chunks[1]
}

fn draw_dashboard(frame: &mut Frame, area: Rect, component: &Component, dashboard: &Dashboard) {
    let block = Block::default()
        .title(format!(" {} ", component.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(2),             // Body
            Constraint::Length(BUTTON_HEIGHT), // Danger button
            Constraint::Min(0),                // Notice
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(dashboard.heading.as_str()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, chunks[0]);
    frame.render_widget(
        Paragraph::new(dashboard.body.as_str()).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let label_width = dashboard.danger_label.chars().count() as u16 + 4;
    let button_area = Rect {
        width: label_width.min(chunks[2].width),
        ..chunks[2]
    };
    render_button(
        frame,
        button_area,
        &dashboard.danger_label,
        true,
        ButtonKind::Danger,
    );

    if let Some(notice) = dashboard.notice() {
        let text = Paragraph::new(Span::styled(notice, Style::default().fg(Color::Red)))
            .wrap(Wrap { trim: true });
        frame.render_widget(text, chunks[3]);
    }
}
