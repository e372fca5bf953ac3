//! UI module for rendering the TUI

mod component_view;
mod components;
mod forms;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    match app.state.current_view {
        View::Login => login::draw(frame, app),
        View::Workspace => {
            let areas = layout::create_layout(frame.area());
            layout::draw_header(frame, areas.header, app);
            layout::draw_sidebar(frame, areas.sidebar, app);
            component_view::draw(frame, areas.main, app);
        }
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modals on top, errors last
    if let Some(pending) = &app.state.pending_danger {
        render_confirm_dialog(
            frame,
            "Delete All Data",
            "Are you sure you want to delete all data?",
            pending.confirm_selected,
        );
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
