//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Normal,
    Danger,
    /// Shown but not usable (e.g. a locked component)
    Disabled,
}

impl ButtonKind {
    fn accent(self) -> Color {
        match self {
            ButtonKind::Normal => Color::Cyan,
            ButtonKind::Danger => Color::Red,
            ButtonKind::Disabled => Color::DarkGray,
        }
    }
}

/// Render a bordered button
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    kind: ButtonKind,
) {
    let accent = kind.accent();
    let border_style = if is_selected {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = match (is_selected, kind) {
        (_, ButtonKind::Disabled) => Style::default().fg(Color::DarkGray),
        (true, _) => Style::default().fg(accent).add_modifier(Modifier::BOLD),
        (false, ButtonKind::Danger) => Style::default().fg(Color::Red),
        (false, ButtonKind::Normal) => Style::default(),
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar entry with a marker and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    marker: &str,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let content = format!("{marker} {label}");
    let kind = if is_enabled {
        ButtonKind::Normal
    } else {
        ButtonKind::Disabled
    };
    render_button(frame, area, &content, is_selected, kind);
}
