//! Application state and core logic

use crate::auth::{AccountDirectory, CredentialVerifier, Session};
use crate::components::{default_components, Access, Component, Content, FormComponent};
use crate::config::AppConfig;
use crate::state::forms::rules::required;
use crate::state::forms::{FieldSpec, Form, FormError, FormSchema};
use crate::state::{AppState, Focus, PendingDanger, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: AppConfig,
    pub session: Session,
    /// Components in display order
    pub components: Vec<Component>,
    /// Username/password form shown while logged out
    pub login: FormComponent,
    verifier: Box<dyn CredentialVerifier>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with the built-in components and configured accounts
    pub fn new(config: AppConfig) -> Result<Self> {
        let verifier = Box::new(AccountDirectory::new(config.accounts()));
        Self::with_parts(config, verifier, default_components()?)
    }

    pub fn with_parts(
        config: AppConfig,
        verifier: Box<dyn CredentialVerifier>,
        components: Vec<Component>,
    ) -> Result<Self> {
        Ok(Self {
            state: AppState::default(),
            config,
            session: Session::default(),
            components,
            login: login_form()?,
            verifier,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn active_component(&self) -> Option<&Component> {
        self.components.get(self.state.active_component)
    }

    /// Gate check for the component at `index`
    pub fn access(&self, index: usize) -> Access {
        self.components
            .get(index)
            .map_or(Access::Granted, |c| c.access(&self.session))
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle danger confirmation (modal)
        if self.state.pending_danger.is_some() {
            self.handle_confirm_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::Workspace => self.handle_workspace_key(key)?,
        }
        Ok(())
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.attempt_login(),
            _ => edit_form(&mut self.login, key),
        }
    }

    fn attempt_login(&mut self) {
        let result = match self.login.submit() {
            Ok(result) => result.clone(),
            Err(err) => {
                self.state.push_error(err.to_string());
                return;
            }
        };
        if !result.accepted {
            // Field errors are drawn inline under the login form
            return;
        }

        let form = self.login.form();
        let username = form.value("username").map(ToString::to_string).unwrap_or_default();
        let password = form.value("password").map(ToString::to_string).unwrap_or_default();

        match Session::login(self.verifier.as_ref(), &username, &password) {
            Ok(session) => {
                tracing::info!("User {username} logged in with roles {:?}", session.roles());
                self.session = session;
                self.state.current_view = View::Workspace;
                self.state.status_message = Some(format!("Logged in as {username}"));
            }
            Err(err) => {
                tracing::warn!("Login failed for {username}: {err}");
                self.state.push_error("Invalid credentials".to_string());
            }
        }
        if let Err(err) = self.login.reset() {
            self.state.push_error(err.to_string());
        }
    }

    pub fn logout(&mut self) {
        if let Some(username) = self.session.username() {
            tracing::info!("User {username} logged out");
        }
        self.session.logout();
        self.state.current_view = View::Login;
        self.state.pending_danger = None;
        self.state.status_message = Some("Logged out".to_string());
    }

    fn handle_workspace_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('l') if ctrl => {
                self.logout();
                return Ok(());
            }
            KeyCode::PageDown => {
                self.select_component(true);
                return Ok(());
            }
            KeyCode::PageUp => {
                self.select_component(false);
                return Ok(());
            }
            _ => {}
        }

        let index = self.state.active_component;
        if self.access(index) != Access::Granted {
            return Ok(());
        }
        let Some(component) = self.components.get_mut(index) else {
            return Ok(());
        };

        match &mut component.content {
            Content::Form(form) => match key.code {
                KeyCode::Char('s') if ctrl => match form.submit() {
                    Ok(result) => {
                        let message = if result.accepted {
                            "Form submitted successfully!"
                        } else {
                            "Please fix the highlighted fields"
                        };
                        self.state.status_message = Some(message.to_string());
                    }
                    Err(err) => self.state.push_error(err.to_string()),
                },
                KeyCode::Char('r') if ctrl => {
                    form.reset()?;
                    self.state.status_message = Some("Form cleared".to_string());
                }
                _ => edit_form(form, key),
            },
            Content::Dashboard(_) => {
                if key.code == KeyCode::Enter {
                    self.state.pending_danger = Some(PendingDanger {
                        component: index,
                        confirm_selected: false,
                    });
                }
            }
        }
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_danger.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                pending.confirm_selected = !pending.confirm_selected;
            }
            KeyCode::Enter => {
                let confirmed = pending.confirm_selected;
                let index = pending.component;
                self.state.pending_danger = None;
                if confirmed {
                    if let Some(Content::Dashboard(dashboard)) =
                        self.components.get_mut(index).map(|c| &mut c.content)
                    {
                        dashboard.trigger_danger();
                    }
                }
            }
            KeyCode::Esc => self.state.pending_danger = None,
            _ => {}
        }
    }

    fn select_component(&mut self, forward: bool) {
        let count = self.components.len();
        if count == 0 {
            return;
        }
        let current = self.state.active_component;
        self.state.active_component = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
    }
}

/// Shared field editing keys for any form
fn edit_form(form: &mut FormComponent, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left => form.cycle_option(false),
        KeyCode::Right => form.cycle_option(true),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

/// The login screen is itself a form with two required fields
fn login_form() -> Result<FormComponent, FormError> {
    let schema = FormSchema::new(vec![
        FieldSpec::text("username", "Username"),
        FieldSpec::text("password", "Password").masked(),
    ])?;
    let form = Form::new(schema)?
        .with_validation("username", required(), "Username is required")?
        .with_validation("password", required(), "Password is required")?;
    Ok(FormComponent::new(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, MockCredentialVerifier, Principal};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use std::collections::BTreeSet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn verifier(roles: &'static [&'static str]) -> Box<MockCredentialVerifier> {
        let mut mock = MockCredentialVerifier::new();
        mock.expect_verify().returning(move |user, pass| {
            if user == "ada" && pass == "pw" {
                Ok(Principal {
                    username: user.to_string(),
                    roles: roles.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        });
        Box::new(mock)
    }

    fn app(roles: &'static [&'static str]) -> App {
        App::with_parts(
            AppConfig::default(),
            verifier(roles),
            default_components().unwrap(),
        )
        .unwrap()
    }

    fn active_form(app: &App) -> &FormComponent {
        match app.active_component().map(|c| &c.content) {
            Some(Content::Form(form)) => form,
            _ => panic!("expected a form"),
        }
    }

    fn login(app: &mut App) {
        type_str(app, "ada");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "pw");
        app.handle_key(key(KeyCode::Enter)).unwrap();
    }

    mod login {
        use super::*;

        #[test]
        fn test_starts_on_login() {
            let app = app(&[]);
            assert_eq!(app.state.current_view, View::Login);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_successful_login_opens_workspace() {
            let mut app = app(&["admin"]);
            login(&mut app);
            assert_eq!(app.state.current_view, View::Workspace);
            assert_eq!(app.session.username(), Some("ada"));
            assert_eq!(app.state.status_message.as_deref(), Some("Logged in as ada"));
        }

        #[test]
        fn test_blank_login_shows_field_errors() {
            let mut app = app(&[]);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::Login);
            let result = app.login.last_result().unwrap();
            assert_eq!(result.errors.len(), 2);
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_wrong_password_shows_error_dialog() {
            let mut app = app(&[]);
            type_str(&mut app, "ada");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_str(&mut app, "nope");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.current_error(), Some("Invalid credentials"));

            // Modal: typing is swallowed until dismissed
            type_str(&mut app, "x");
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_errors());
            assert_eq!(app.login.form().value("username").unwrap().to_string(), "");
        }

        #[test]
        fn test_logout_returns_to_login() {
            let mut app = app(&["admin"]);
            login(&mut app);
            app.handle_key(ctrl('l')).unwrap();
            assert_eq!(app.state.current_view, View::Login);
            assert!(app.session.username().is_none());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app(&[]);
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }
    }

    mod workspace {
        use super::*;

        #[test]
        fn test_page_keys_cycle_components() {
            let mut app = app(&["admin"]);
            login(&mut app);
            app.handle_key(key(KeyCode::PageUp)).unwrap();
            assert_eq!(app.state.active_component, app.components.len() - 1);
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert_eq!(app.state.active_component, 0);
        }

        #[test]
        fn test_submit_registration_form() {
            let mut app = app(&[]);
            login(&mut app);
            type_str(&mut app, "ada");
            app.handle_key(ctrl('s')).unwrap();
            let form = active_form(&app);
            assert!(form.last_result().unwrap().accepted);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Form submitted successfully!")
            );
        }

        #[test]
        fn test_enhanced_form_rejects_blank_submission() {
            let mut app = app(&[]);
            login(&mut app);
            app.state.active_component = 2;
            app.handle_key(ctrl('s')).unwrap();
            let form = active_form(&app);
            assert_eq!(form.last_result().unwrap().errors.len(), 3);
        }

        #[test]
        fn test_dashboard_forbidden_without_role() {
            let mut app = app(&["viewer"]);
            login(&mut app);
            app.state.active_component = 3;
            assert_eq!(app.access(3), Access::Forbidden);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.pending_danger.is_none());
        }

        #[test]
        fn test_dashboard_danger_needs_confirmation() {
            let mut app = app(&["admin"]);
            login(&mut app);
            app.state.active_component = 3;
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.pending_danger.is_some());

            // Cancel is preselected
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.pending_danger.is_none());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            let Some(Content::Dashboard(dashboard)) = app.active_component().map(|c| &c.content)
            else {
                panic!("expected dashboard");
            };
            assert!(dashboard.notice().is_some());
        }
    }
}
