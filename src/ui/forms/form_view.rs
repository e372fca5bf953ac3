//! Whole-form rendering: fields, description and the last submission

use super::field_renderer::{draw_field, field_height};
use crate::components::{FormComponent, Presentation};
use crate::state::forms::SubmissionResult;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Options that differ between the login screen and workspace forms
pub struct FormViewOptions<'a> {
    pub show_help: bool,
    /// Key that submits, shown in the hint line
    pub submit_key: &'a str,
    /// Show the submitted values as JSON on success
    pub echo_values: bool,
}

/// Draw a form component inside a titled block
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &FormComponent,
    options: &FormViewOptions,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let described = form.presentation() == Presentation::Described;
    let show_help = described && options.show_help;

    let mut constraints = Vec::new();
    if described && form.description().is_some() {
        constraints.push(Constraint::Length(2)); // Description
    }
    for (spec, _) in form.fields() {
        constraints.push(Constraint::Length(field_height(spec, show_help)));
    }
    constraints.push(Constraint::Min(0)); // Submission result
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);
    let mut slots = chunks.iter().copied();

    if described {
        if let Some(description) = form.description() {
            if let Some(slot) = slots.next() {
                let text = Paragraph::new(description)
                    .style(Style::default().fg(Color::White))
                    .wrap(Wrap { trim: true });
                frame.render_widget(text, slot);
            }
        }
    }

    let result = form.last_result();
    for (index, (spec, draft)) in form.fields().enumerate() {
        let Some(slot) = slots.next() else {
            break;
        };
        let has_error = result.is_some_and(|r| r.errors_for(&spec.name).next().is_some());
        draw_field(
            frame,
            slot,
            spec,
            draft,
            index == form.active_field(),
            has_error,
            show_help,
        );
    }

    if let Some(slot) = slots.next() {
        if let Some(result) = result {
            let values = options
                .echo_values
                .then(|| form.form().state().to_json().ok())
                .flatten();
            draw_result(frame, slot, result, values.as_ref());
        }
    }

    if let Some(slot) = slots.next() {
        let key = Style::default().fg(Color::Cyan);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(": next field  "),
            Span::styled("←/→", key),
            Span::raw(": choose  "),
            Span::styled(options.submit_key, key),
            Span::raw(": submit"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, slot);
    }
}

/// Success banner with the values, or the list of failed rules
fn draw_result(
    frame: &mut Frame,
    area: Rect,
    result: &SubmissionResult,
    values: Option<&serde_json::Value>,
) {
    let mut lines = Vec::new();
    if result.accepted {
        lines.push(Line::from(Span::styled(
            "Form submitted successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(values) = values {
            let pretty = serde_json::to_string_pretty(values).unwrap_or_default();
            lines.extend(
                pretty
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray)))),
            );
        }
    } else {
        lines.extend(result.errors.iter().map(|e| {
            Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))
        }));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
