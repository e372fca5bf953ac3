//! Confirmation dialog for destructive actions

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a Cancel/Confirm dialog. `confirm_selected` highlights Confirm.
pub fn render_confirm_dialog(
    frame: &mut Frame,
    title: &str,
    message: &str,
    confirm_selected: bool,
) {
    let option = |label: &'static str, selected: bool, color: Color| {
        let prefix = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(format!("{prefix}{label}"), style))
    };

    let footer = vec![
        option("Cancel", !confirm_selected, Color::White),
        option("Confirm", confirm_selected, Color::Red),
        Line::from(""),
        Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent: Color::Red,
            message,
            footer,
            max_width: 50,
        },
    );
}
