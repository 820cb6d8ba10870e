//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and backend responses, translating them into state changes and action
//! sequences. It is the only entry point into the application layer.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (key presses, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the feature modules
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `SelectNext`, `SelectPrev`, `NextPage`, `PrevPage`, `Navigate`, `OpenSelected`
//! - **Mutations**: `ToggleLike`, `Watch`, `DeleteSelectedJob`, `EditSelectedJob`, `ComposeComment`
//! - **Forms**: `Char`, `Backspace`, `NextField`, `PrevField`, `Submit`, `Cancel`
//! - **Backend**: `ApiResponse` carrying the request tag
//!
//! User-facing failures (backend errors, validation, unreadable images) are
//! shown in the error banner and do not escape the handler.
//!
//! # Example
//!
//! ```rust
//! use lurkforwork::app::{handle_event, AppState, Event};
//! use lurkforwork::api::ApiClient;
//! use lurkforwork::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::new("http://localhost:5005"), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), lurkforwork::LurkError>(())
//! ```

use super::actions::Action;
use super::auth::{on_auth_response, submit_login, submit_register};
use super::feed::{next_page, on_creator_response, on_feed_response, prev_page};
use super::forms::FormKind;
use super::modes::Popup;
use super::mutations::{
    compose_comment, delete_selected_job, edit_selected_job, on_mutation_response, submit_comment,
    submit_new_job, submit_update_job, submit_update_profile, submit_watch, toggle_like, watch,
};
use super::navigation::{change_screen, navigate, reload};
use super::profile::{on_profile_response, on_watchee_response};
use super::screen::{NavTarget, Route};
use super::state::{AppState, Selection};
use crate::api::RequestTag;
use crate::domain::error::{LurkError, Result};

/// Events triggered by user input or backend responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one row (wraps to top).
    SelectNext,
    /// Moves the cursor up by one row (wraps to bottom).
    SelectPrev,
    /// Loads the next feed page.
    NextPage,
    /// Loads the previous feed page.
    PrevPage,
    /// Moves to a top-level screen.
    Navigate(NavTarget),
    /// Opens the profile behind the selected row.
    OpenSelected,
    /// Likes or unlikes the selected job.
    ToggleLike,
    /// Opens or closes the likes list of the selected job.
    ToggleLikes,
    /// Opens or closes the comments list of the selected job.
    ToggleComments,
    /// Opens the comment overlay for the selected job.
    ComposeComment,
    /// Watch toggle on a profile, watch-by-email on the dashboard.
    Watch,
    /// Opens the update form for the selected own job.
    EditSelectedJob,
    /// Deletes the selected own job.
    DeleteSelectedJob,
    /// Opens the profile update form.
    EditProfile,
    /// Re-enters the current screen.
    Reload,
    /// Hides the error banner.
    DismissError,
    /// Types a character into the focused field.
    Char(char),
    /// Deletes the last character of the focused field.
    Backspace,
    NextField,
    PrevField,
    /// Submits the open form.
    Submit,
    /// Closes the open form, or the open popup in browse mode.
    Cancel,
    /// Hides the plugin pane.
    CloseFocus,

    /// A backend response, routed by the tag it was issued with.
    ApiResponse {
        tag: RequestTag,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in order.
///
/// # Errors
///
/// Only internal failures are returned (for example a request payload that
/// cannot be serialized). Backend, validation and image errors are shown in
/// the banner instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventName(event)).entered();

    match dispatch(state, event) {
        Ok(outcome) => Ok(outcome),
        Err(e @ (LurkError::Api(_)
        | LurkError::Validation(_)
        | LurkError::NotAuthenticated
        | LurkError::Image(_))) => {
            state.error.show(e.user_message());
            Ok((true, vec![]))
        }
        Err(e) => Err(e),
    }
}

/// Debug view of an event without response bodies.
struct EventName<'a>(&'a Event);

impl std::fmt::Debug for EventName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::ApiResponse { tag, status, body } => f
                .debug_struct("ApiResponse")
                .field("tag", tag)
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            Event::Char(_) => f.write_str("Char"),
            other => write!(f, "{other:?}"),
        }
    }
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::SelectNext => {
            state.move_selection_down();
            state.popup = None;
            Ok((true, vec![]))
        }
        Event::SelectPrev => {
            state.move_selection_up();
            state.popup = None;
            Ok((true, vec![]))
        }
        Event::NextPage => rendered(next_page(state)?),
        Event::PrevPage => rendered(prev_page(state)?),
        Event::Navigate(target) => rendered(navigate(state, *target)?),
        Event::OpenSelected => {
            let user_id = match state.selection() {
                Some(Selection::FeedJob { creator_id, .. }) => creator_id,
                Some(Selection::Watchee { user_id }) => user_id,
                _ => return Ok((false, vec![])),
            };
            rendered(change_screen(state, Route::Profile { user_id })?)
        }
        Event::ToggleLike => rendered(toggle_like(state)?),
        Event::ToggleLikes => Ok((toggle_popup(state, Popup::Likes), vec![])),
        Event::ToggleComments => Ok((toggle_popup(state, Popup::Comments), vec![])),
        Event::ComposeComment => {
            compose_comment(state);
            Ok((true, vec![]))
        }
        Event::Watch => rendered(watch(state)?),
        Event::EditSelectedJob => rendered(edit_selected_job(state)?),
        Event::DeleteSelectedJob => rendered(delete_selected_job(state)?),
        Event::EditProfile => rendered(change_screen(state, Route::UpdateProfile)?),
        Event::Reload => rendered(reload(state)?),
        Event::DismissError => {
            let was_visible = state.error.is_visible();
            state.error.hide();
            Ok((was_visible, vec![]))
        }
        Event::Char(c) => edit_form(state, |form| form.insert_char(*c)),
        Event::Backspace => edit_form(state, super::forms::Form::backspace),
        Event::NextField => edit_form(state, super::forms::Form::next_field),
        Event::PrevField => edit_form(state, super::forms::Form::prev_field),
        Event::Submit => submit(state),
        Event::Cancel => cancel(state),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ApiResponse { tag, status, body } => on_response(state, tag, *status, body),
    }
}

fn rendered(actions: Vec<Action>) -> Result<(bool, Vec<Action>)> {
    Ok((true, actions))
}

fn toggle_popup(state: &mut AppState, popup: Popup) -> bool {
    if state.selected_feed_entry().is_none() {
        return false;
    }
    state.popup = if state.popup == Some(popup) { None } else { Some(popup) };
    true
}

fn edit_form(state: &mut AppState, edit: impl FnOnce(&mut super::forms::Form)) -> Result<(bool, Vec<Action>)> {
    match state.form.as_mut() {
        Some(form) => {
            edit(form);
            Ok((true, vec![]))
        }
        None => Ok((false, vec![])),
    }
}

fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(form) = state.form.clone() else {
        return Ok((false, vec![]));
    };
    tracing::debug!(form = ?form.kind, "form submitted");

    let actions = match form.kind {
        FormKind::Login => submit_login(state, &form)?,
        FormKind::Register => submit_register(state, &form)?,
        FormKind::UpdateProfile => submit_update_profile(state, &form)?,
        FormKind::NewJob => submit_new_job(state, &form)?,
        FormKind::UpdateJob { job_id } => submit_update_job(state, &form, job_id)?,
        FormKind::Comment { job_id } => submit_comment(state, &form, job_id)?,
        FormKind::Watch => submit_watch(state, &form)?,
    };
    Ok((true, actions))
}

fn cancel(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(form) = state.form.as_ref() else {
        return Ok((state.popup.take().is_some(), vec![]));
    };
    match form.kind {
        FormKind::Comment { .. } | FormKind::Watch => {
            state.form = None;
            Ok((true, vec![]))
        }
        FormKind::Login | FormKind::Register => Ok((false, vec![Action::CloseFocus])),
        FormKind::NewJob => rendered(change_screen(state, Route::Dashboard)?),
        FormKind::UpdateProfile | FormKind::UpdateJob { .. } => rendered(navigate(state, NavTarget::MyProfile)?),
    }
}

fn on_response(state: &mut AppState, tag: &RequestTag, status: u16, body: &[u8]) -> Result<(bool, Vec<Action>)> {
    tracing::debug!(tag = ?tag, status, body_len = body.len(), "response received");

    let actions = match *tag {
        RequestTag::Login | RequestTag::Register => on_auth_response(state, status, body)?,
        RequestTag::Feed { generation, page } => on_feed_response(state, generation, page, status, body)?,
        RequestTag::Creator { generation, user_id } => on_creator_response(state, generation, user_id, status, body)?,
        RequestTag::Profile { generation, user_id } => on_profile_response(state, generation, user_id, status, body)?,
        RequestTag::Watchee { generation, user_id } => on_watchee_response(state, generation, user_id, status, body)?,
        RequestTag::Mutation { ref mutation, origin } => on_mutation_response(state, mutation, origin, status, body)?,
    };
    Ok((true, actions))
}
