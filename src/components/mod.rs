//! Composable page components
//!
//! A component is a piece of content (a form or a dashboard) plus optional
//! capability flags. Gating is a flag here, not a subtype: the renderer asks
//! [`Component::access`] and draws whatever the answer calls for.

mod catalog;
mod dashboard;
mod form_component;

pub use catalog::default_components;
pub use dashboard::Dashboard;
pub use form_component::{FormComponent, Presentation};

use crate::auth::AuthContext;
use std::collections::BTreeSet;

#[derive(Debug)]
pub enum Content {
    Form(FormComponent),
    Dashboard(Dashboard),
}

/// Result of checking a component's gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Unauthenticated,
    Forbidden,
}

impl Access {
    /// Message shown in place of gated content
    pub fn denial_message(&self) -> Option<&'static str> {
        match self {
            Access::Granted => None,
            Access::Unauthenticated => Some("Authentication required"),
            Access::Forbidden => Some("Insufficient permissions"),
        }
    }
}

#[derive(Debug)]
pub struct Component {
    pub title: String,
    pub content: Content,
    requires_auth: bool,
    required_roles: BTreeSet<String>,
}

impl Component {
    pub fn form(title: &str, form: FormComponent) -> Self {
        Self::new(title, Content::Form(form))
    }

    pub fn dashboard(title: &str, dashboard: Dashboard) -> Self {
        Self::new(title, Content::Dashboard(dashboard))
    }

    fn new(title: &str, content: Content) -> Self {
        Self {
            title: title.to_string(),
            content,
            requires_auth: false,
            required_roles: BTreeSet::new(),
        }
    }

    /// Gate the component. With roles, holding any one of them is enough;
    /// with none, any authenticated user passes.
    pub fn gated<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires_auth = true;
        self.required_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_gated(&self) -> bool {
        self.requires_auth
    }

    pub fn required_roles(&self) -> &BTreeSet<String> {
        &self.required_roles
    }

    pub fn access(&self, auth: &dyn AuthContext) -> Access {
        if !self.requires_auth {
            return Access::Granted;
        }
        if !auth.is_authenticated() {
            return Access::Unauthenticated;
        }
        if !self.required_roles.is_empty()
            && !self.required_roles.iter().any(|role| auth.has_role(role))
        {
            return Access::Forbidden;
        }
        Access::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthContext;
    use crate::state::forms::{Form, FormSchema};

    fn auth(authenticated: bool, roles: &'static [&'static str]) -> MockAuthContext {
        let mut mock = MockAuthContext::new();
        mock.expect_is_authenticated().return_const(authenticated);
        mock.expect_has_role()
            .returning(move |role| roles.iter().any(|r| *r == role));
        mock
    }

    fn empty_form() -> FormComponent {
        FormComponent::new(Form::new(FormSchema::default()).unwrap())
    }

    #[test]
    fn test_ungated_component_is_always_granted() {
        let component = Component::form("Survey", empty_form());
        assert!(!component.is_gated());
        assert_eq!(component.access(&auth(false, &[])), Access::Granted);
    }

    #[test]
    fn test_gate_requires_authentication() {
        let component = Component::dashboard("Admin", Dashboard::admin()).gated(["admin"]);
        let access = component.access(&auth(false, &["admin"]));
        assert_eq!(access, Access::Unauthenticated);
        assert_eq!(access.denial_message(), Some("Authentication required"));
    }

    #[test]
    fn test_gate_requires_any_listed_role() {
        let component =
            Component::dashboard("Admin", Dashboard::admin()).gated(["admin", "owner"]);
        assert_eq!(component.access(&auth(true, &["viewer"])), Access::Forbidden);
        assert_eq!(component.access(&auth(true, &["owner"])), Access::Granted);
    }

    #[test]
    fn test_gate_without_roles_only_needs_login() {
        let component = Component::form("Members", empty_form()).gated(Vec::<String>::new());
        assert!(component.is_gated());
        assert!(component.required_roles().is_empty());
        assert_eq!(component.access(&auth(true, &[])), Access::Granted);
    }
}
