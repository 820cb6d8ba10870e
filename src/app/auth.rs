//! Login and registration.

use super::actions::Action;
use super::forms::{FieldKey, Form};
use super::navigation::change_screen;
use super::screen::Route;
use super::state::AppState;
use crate::api::{decode, ApiCall, AuthResponse, RequestTag};
use crate::domain::error::{LurkError, Result};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Submits the login form.
///
/// # Errors
///
/// Returns request construction errors.
pub fn submit_login(state: &mut AppState, form: &Form) -> Result<Vec<Action>> {
    let call = ApiCall::Login {
        email: form.value(FieldKey::Email).to_string(),
        password: form.value(FieldKey::Password).to_string(),
    };
    Ok(vec![state.request(RequestTag::Login, &call)?])
}

/// Submits the registration form. Mismatched passwords never reach the backend.
///
/// # Errors
///
/// Returns [`LurkError::Validation`] on a password mismatch.
pub fn submit_register(state: &mut AppState, form: &Form) -> Result<Vec<Action>> {
    if form.value(FieldKey::Password) != form.value(FieldKey::ConfirmPassword) {
        return Err(LurkError::Validation(PASSWORD_MISMATCH.to_string()));
    }
    let call = ApiCall::Register {
        email: form.value(FieldKey::Email).to_string(),
        password: form.value(FieldKey::Password).to_string(),
        name: form.value(FieldKey::Name).to_string(),
    };
    Ok(vec![state.request(RequestTag::Register, &call)?])
}

/// Handles a login or registration response.
///
/// Success stores the token and user id, then opens the dashboard.
///
/// # Errors
///
/// Returns the backend failure for the banner; the form stays as typed.
pub fn on_auth_response(state: &mut AppState, status: u16, body: &[u8]) -> Result<Vec<Action>> {
    let auth = decode::<AuthResponse>(status, body)?;
    tracing::debug!(user_id = auth.user_id, "signed in");
    state.session.sign_in(auth.token, auth.user_id);
    change_screen(state, Route::Dashboard)
}
