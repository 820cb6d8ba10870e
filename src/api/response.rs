//! Response normalization.
//!
//! Every backend response is reduced to `Ok(T)` or `Err(ApiError)` regardless
//! of status, so callers branch on the result instead of inspecting status
//! codes.

use crate::domain::error::ApiError;
use crate::domain::models::{JobId, UserId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Outcome of one backend call.
pub type ApiOutcome<T> = std::result::Result<T, ApiError>;

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: UserId,
}

/// Body of a successful `POST /job`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobCreated {
    pub id: JobId,
}

/// Acknowledgement with no meaningful payload.
pub type Ack = serde::de::IgnoredAny;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn fallback_message(status: u16) -> String {
    match status {
        400 => "Invalid input".to_string(),
        403 => "Invalid token".to_string(),
        _ => format!("Request failed (status {status})"),
    }
}

const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Decodes a raw host response into the expected payload.
///
/// Successful statuses decode the body as `T`; an empty body is read as
/// `null`, which satisfies [`Ack`]. Failed statuses surface the backend's
/// `error` text verbatim, falling back to a status-class message.
///
/// # Errors
///
/// Returns an [`ApiError`] for failed statuses and undecodable bodies.
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiOutcome<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };

    if is_success(status) {
        return serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(status, error = %e, "malformed success body");
            ApiError::new(status, "Malformed response")
        });
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback_message(status));

    Err(ApiError::new(status, message))
}
