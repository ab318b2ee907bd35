use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Status(StatusCode),

    #[error("unexpected payload format: {0}")]
    Format(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn format(message: impl Into<String>) -> DashboardError {
        DashboardError::Format(message.into())
    }

    pub fn internal(message: impl Into<String>) -> DashboardError {
        DashboardError::Internal(message.into())
    }
}
