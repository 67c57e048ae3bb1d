/// Unified error handling module
use thiserror::Error;

/// Message shown when the underlying failure carries no usable text
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch data";

/// Single error kind for the fetch boundary: transport, upstream status and
/// decode failures all collapse into a displayable message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self {
                message: FETCH_FALLBACK_MESSAGE.to_string(),
            };
        }
        Self { message }
    }

    /// Display message surfaced to the user
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Type alias for fetch results
pub type FetchResult<T> = Result<T, FetchError>;
