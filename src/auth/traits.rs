//! Trait seams for authentication, enabling mocking in tests

use super::{AuthError, Principal};

/// What a gated component may ask about the current user
#[cfg_attr(test, mockall::automock)]
pub trait AuthContext {
    /// Whether a verified credential is present
    fn is_authenticated(&self) -> bool;

    /// Whether the current user holds `role`
    fn has_role(&self, role: &str) -> bool;
}

/// Checks a username/password pair
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError>;
}
