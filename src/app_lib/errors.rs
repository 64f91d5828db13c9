use thiserror::Error;

/// Errors surfaced by the API helpers, session storage and auth bootstrap.
///
/// The enum is `Clone` so one profile-fetch outcome can be handed to every
/// caller waiting on the same in-flight request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl AppError {
    /// HTTP status of a backend rejection, if this error came from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses, i.e. the stored token was refused.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// The message shown to a user, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Parse(message)
            | AppError::Serialization(message)
            | AppError::Storage(message)
            | AppError::Cancelled(message)
            | AppError::Http { message, .. } => message,
        }
    }
}
