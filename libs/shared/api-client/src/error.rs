use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. `message` is the response body, or a generic
    /// `"{action} failed ({status})"` when the body was empty.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token storage error: {0}")]
    TokenStorage(#[from] std::io::Error),

    #[error("Invalid access token: {0}")]
    InvalidToken(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode, body: &str, action: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("{} failed ({})", action, status.as_u16())
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }
}
