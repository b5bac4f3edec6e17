//! Error type for dashboard operations.

/// Error type for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Shell not sent before panels")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Panel '{0}' already reached a terminal state")]
    PanelClosed(String),

    #[error("Panel '{0}' is not declared by the shell")]
    UnknownPanel(String),

    #[error("Fetch error: {0}")]
    FetchError(#[from] anyhow::Error),
}
