//! Credential checks and the session that gates components
//!
//! Nothing here is real security: accounts come from the user config in
//! plaintext and tokens are random identifiers that are never signed.

mod directory;
mod session;
mod traits;

pub use directory::AccountDirectory;
pub use session::{Session, SessionToken};
pub use traits::{AuthContext, CredentialVerifier};

#[cfg(test)]
pub use traits::{MockAuthContext, MockCredentialVerifier};

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid token format")]
    InvalidToken,

    #[error("invalid credentials")]
    InvalidCredentials,
}

/// A verified user and the roles granted to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: BTreeSet<String>,
}
