//! Account list backed credential verifier

use super::{AuthError, CredentialVerifier, Principal};
use crate::config::Account;

/// Verifies against the accounts listed in the user config
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

impl CredentialVerifier for AccountDirectory {
    fn verify(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Principal {
            username: account.username.clone(),
            roles: account.roles.iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AccountDirectory {
        AccountDirectory::new(vec![Account {
            username: "admin".to_string(),
            password: "hunter22".to_string(),
            roles: vec!["admin".to_string()],
        }])
    }

    #[test]
    fn test_known_account_is_verified() {
        let principal = directory().verify("admin", "hunter22").unwrap();
        assert_eq!(principal.username, "admin");
        assert!(principal.roles.contains("admin"));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        assert_eq!(
            directory().verify("admin", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        assert_eq!(
            directory().verify("mallory", "hunter22"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_empty_directory_rejects_everyone() {
        assert!(AccountDirectory::default().verify("", "").is_err());
    }
}
