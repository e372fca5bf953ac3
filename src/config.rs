//! Configuration handling for the app

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_PAGE_TITLE: &str = "Composable Forms";

/// A login account. Demo only: the password is stored in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Title shown above the components
    pub page_title: Option<String>,
    /// Render per-field help text under described forms
    pub show_help_text: Option<bool>,
    /// Accounts allowed to log in
    pub accounts: Option<Vec<Account>>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formdeck", "formdeck")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn show_help_text(&self) -> bool {
        self.show_help_text.unwrap_or(true)
    }

    /// Configured accounts, or the demo admin/guest pair when none are set
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.clone().unwrap_or_else(|| {
            vec![
                Account {
                    username: "admin".to_string(),
                    password: "admin".to_string(),
                    roles: vec!["admin".to_string()],
                },
                Account {
                    username: "guest".to_string(),
                    password: "guest".to_string(),
                    roles: vec!["viewer".to_string()],
                },
            ]
        })
    }
}
