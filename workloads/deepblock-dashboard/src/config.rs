//! Dashboard configuration.

/// Id of the "last updated" indicator element in the shell.
pub const LAST_UPDATED_ID: &str = "last-updated";

/// Configuration for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Page title.
    pub title: String,
    /// Base path the snapshot files are served from.
    pub data_base: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "DeepBlock AI Dashboard".to_string(),
            data_base: "/data".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration with the given page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the snapshot base path.
    pub fn with_data_base(mut self, base: impl Into<String>) -> Self {
        self.data_base = base.into();
        self
    }
}
