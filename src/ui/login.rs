//! Login screen

use super::forms::{draw_form, FormViewOptions};
use super::layout::centered;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const LOGIN_WIDTH: u16 = 50;
// Two fields, one result line per field, hints and borders
const LOGIN_HEIGHT: u16 = 14;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),         // Page title
            Constraint::Min(LOGIN_HEIGHT), // Login box
            Constraint::Length(1),         // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(app.config.page_title())).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, rows[0]);

    let box_area = centered(rows[1], LOGIN_WIDTH, LOGIN_HEIGHT);
    draw_form(
        frame,
        box_area,
        "Login",
        &app.login,
        &FormViewOptions {
            show_help: false,
            submit_key: "Enter",
            echo_values: false,
        },
    );
}
