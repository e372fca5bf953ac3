//! Admin dashboard panel

/// Static admin panel with one destructive-looking action. The action only
/// reports what it would do.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub heading: String,
    pub body: String,
    pub danger_label: String,
    notice: Option<String>,
}

impl Dashboard {
    pub fn admin() -> Self {
        Self {
            heading: "Admin Dashboard".to_string(),
            body: "Sensitive admin operations go here".to_string(),
            danger_label: "Delete All Data (Danger)".to_string(),
            notice: None,
        }
    }

    pub fn trigger_danger(&mut self) {
        tracing::warn!("Danger action requested on {}", self.heading);
        self.notice = Some("This would delete all data in a real app".to_string());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_action_only_sets_notice() {
        let mut dashboard = Dashboard::admin();
        assert!(dashboard.notice().is_none());
        dashboard.trigger_danger();
        assert_eq!(
            dashboard.notice(),
            Some("This would delete all data in a real app")
        );
    }
}
