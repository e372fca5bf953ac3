//! Field rendering utilities for forms

use crate::state::forms::{FieldKind, FieldSpec};
use crate::state::FieldDraft;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field takes, including its help line when shown
pub fn field_height(spec: &FieldSpec, show_help: bool) -> u16 {
    if show_help && spec.help_text.is_some() {
        4
    } else {
        3
    }
}

/// Value as it should appear in the input box
fn display_value(spec: &FieldSpec, draft: &FieldDraft, is_active: bool) -> String {
    let raw = draft.display();
    if spec.masked {
        return "•".repeat(raw.chars().count());
    }
    match (&spec.kind, is_active) {
        (FieldKind::Select(_), true) => format!("◀ {raw} ▶"),
        (FieldKind::Number, false) if raw.is_empty() => "0".to_string(),
        _ if raw.is_empty() && !is_active => "(empty)".to_string(),
        _ => raw.to_string(),
    }
}

/// Draw one field: bordered input box, then its help text if requested
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    draft: &FieldDraft,
    is_active: bool,
    has_error: bool,
    show_help: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let takes_cursor = is_active && !matches!(spec.kind, FieldKind::Select(_));
    let cursor = if takes_cursor { "▌" } else { "" };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value(spec, draft, is_active), value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    let block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), input_area);

    if let Some(help) = spec.help_text.as_deref().filter(|_| show_help) {
        if area.height > 3 {
            let help_area = Rect {
                y: area.y + 3,
                height: 1,
                ..area
            };
            draw_help_text(frame, help_area, help);
        }
    }
}

/// Draw a dim one-line help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ⓘ ", Style::default().fg(Color::Blue)),
        Span::styled(text, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}
