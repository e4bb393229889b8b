//! Error types for the Kovert dashboard client

use thiserror::Error;

/// Main error type for the dashboard client
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::Internal(err.to_string())
    }
}

/// Cloneable snapshot of a failed fetch, kept in resource state so the UI can
/// report it after the error itself has been returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status, when the backend answered at all
    pub status: Option<u16>,

    /// Human-readable failure description
    pub message: String,
}

impl ApiFailure {
    pub fn from_error(err: &DashboardError) -> Self {
        match err {
            DashboardError::ApiError { status, body } => Self {
                status: Some(*status),
                message: body.clone(),
            },
            other => Self {
                status: None,
                message: other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
