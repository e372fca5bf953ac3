//! Login session state

use super::{AuthContext, AuthError, CredentialVerifier, Principal};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

const MIN_TOKEN_LEN: usize = 10;

/// Opaque session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Accept an externally supplied token after a basic format check
    #[allow(dead_code)] // The app only issues its own tokens so far
    pub fn parse(token: &str) -> Result<Self, AuthError> {
        if token.chars().count() < MIN_TOKEN_LEN {
            return Err(AuthError::InvalidToken);
        }
        Ok(Self(token.to_string()))
    }

    /// Issue a fresh random token
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Who is using the app right now
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        username: String,
        roles: BTreeSet<String>,
        token: SessionToken,
        since: DateTime<Utc>,
    },
}

impl Session {
    /// Verify credentials and open a session
    pub fn login(
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<Self, AuthError> {
        let principal = verifier.verify(username, password)?;
        Ok(Self::from_principal(principal, SessionToken::issue()))
    }

    pub fn from_principal(principal: Principal, token: SessionToken) -> Self {
        Session::Authenticated {
            username: principal.username,
            roles: principal.roles,
            token,
            since: Utc::now(),
        }
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { username, .. } => Some(username.as_str()),
        }
    }

    pub fn roles(&self) -> Vec<&str> {
        match self {
            Session::Anonymous => Vec::new(),
            Session::Authenticated { roles, .. } => roles.iter().map(String::as_str).collect(),
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn since(&self) -> Option<DateTime<Utc>> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { since, .. } => Some(*since),
        }
    }
}

impl AuthContext for Session {
    fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    fn has_role(&self, role: &str) -> bool {
        match self {
            Session::Anonymous => false,
            Session::Authenticated { roles, .. } => roles.contains(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockCredentialVerifier;
    use mockall::predicate::function;

    fn admin() -> Principal {
        Principal {
            username: "root".to_string(),
            roles: BTreeSet::from(["admin".to_string()]),
        }
    }

    mod token {
        use super::*;

        #[test]
        fn test_short_token_is_rejected() {
            assert_eq!(SessionToken::parse("abc"), Err(AuthError::InvalidToken));
            assert_eq!(SessionToken::parse("123456789"), Err(AuthError::InvalidToken));
        }

        #[test]
        fn test_long_enough_token_is_accepted() {
            let token = SessionToken::parse("valid_token_1234567890").unwrap();
            assert_eq!(token.as_str(), "valid_token_1234567890");
        }

        #[test]
        fn test_issued_tokens_pass_the_format_check() {
            let token = SessionToken::issue();
            assert!(SessionToken::parse(token.as_str()).is_ok());
            assert_ne!(token, SessionToken::issue());
        }
    }

    mod login {
        use super::*;

        #[test]
        fn test_login_uses_verifier() {
            let mut verifier = MockCredentialVerifier::new();
            verifier
                .expect_verify()
                .with(function(|u: &str| u == "root"), function(|p: &str| p == "pw"))
                .times(1)
                .returning(|_, _| Ok(admin()));

            let session = Session::login(&verifier, "root", "pw").unwrap();
            assert!(session.is_authenticated());
            assert!(session.has_role("admin"));
            assert!(!session.has_role("editor"));
            assert_eq!(session.username(), Some("root"));
            assert!(session.since().is_some());
        }

        #[test]
        fn test_failed_login_propagates_error() {
            let mut verifier = MockCredentialVerifier::new();
            verifier
                .expect_verify()
                .returning(|_, _| Err(AuthError::InvalidCredentials));

            let result = Session::login(&verifier, "root", "nope");
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }

        #[test]
        fn test_logout_clears_everything() {
            let mut session = Session::from_principal(admin(), SessionToken::issue());
            session.logout();
            assert!(!session.is_authenticated());
            assert!(!session.has_role("admin"));
            assert!(session.username().is_none());
            assert!(session.roles().is_empty());
        }
    }
}
