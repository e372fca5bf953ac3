//! Application state definitions

use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Workspace,
}

impl View {
    /// Key hints shown in the status bar
    pub fn hints(&self) -> &'static str {
        match self {
            View::Login => "Tab: next field | Enter: log in | Ctrl+C: quit",
            View::Workspace => {
                "Ctrl+S: submit | Ctrl+R: clear | PgUp/PgDn: component | Ctrl+L: log out | Ctrl+C: quit"
            }
        }
    }
}

/// A destructive action waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDanger {
    /// Component that asked for it
    pub component: usize,
    pub confirm_selected: bool,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Index into the app's component list
    pub active_component: usize,
    /// Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    pub pending_danger: Option<PendingDanger>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
