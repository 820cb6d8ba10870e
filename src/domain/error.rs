//! Error types for the LurkForWork plugin.
//!
//! This module defines the centralized error type [`LurkError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Backend
//! failures are carried as [`ApiError`] values so the event handler can branch
//! on them and surface their message through the error banner.

use thiserror::Error;

/// A failed backend call, normalized to a status code and a user-facing message.
///
/// The message is the backend's own `error` text when the response carried
/// one, otherwise a fallback derived from the status class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status reported by the host.
    pub status: u16,
    /// Message shown to the user.
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// The main error type for LurkForWork plugin operations.
#[derive(Debug, Error)]
pub enum LurkError {
    /// The backend rejected a request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client-side form validation failed.
    ///
    /// The string is shown verbatim in the error banner.
    #[error("{0}")]
    Validation(String),

    /// An authenticated call was attempted without a session token.
    #[error("Not logged in")]
    NotAuthenticated,

    /// An image file could not be turned into a data URL.
    #[error("{0}")]
    Image(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl LurkError {
    /// Text suitable for the error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A specialized `Result` type for LurkForWork operations.
pub type Result<T> = std::result::Result<T, LurkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_show_the_backend_message() {
        let err = LurkError::from(ApiError::new(403, "Invalid token"));
        assert_eq!(err.user_message(), "Invalid token");
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = LurkError::Validation("Passwords do not match".into());
        assert_eq!(err.user_message(), "Passwords do not match");
    }
}
