//! Mutation handlers.
//!
//! Each mutation reads the typed selection, issues one request tagged with a
//! [`Mutation`] and the screen it came from, and waits. A failure leaves the
//! state untouched and surfaces through the banner. A success updates the
//! cached like or watch state and then refreshes the originating screen, so
//! the view reflects what the backend confirmed. If the user has moved on to
//! another screen in the meantime, only the cache is updated.

use super::actions::Action;
use super::forms::{FieldKey, Form, FormKind};
use super::navigation::{change_screen, reload};
use super::screen::Route;
use super::state::{AppState, Selection};
use crate::api::{decode, Ack, ApiCall, JobCreated, JobUpdate, Mutation, NewJob, ProfileUpdate, RequestTag};
use crate::domain::error::{LurkError, Result};
use crate::domain::models::{JobId, Like, UserId};
use crate::domain::session::ScreenId;
use crate::domain::time::parse_start_date;
use crate::infrastructure::file_to_data_url;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_START_DATE: &str = "Invalid start date";

fn start_date(raw: &str) -> Result<String> {
    parse_start_date(raw).ok_or_else(|| LurkError::Validation(INVALID_START_DATE.to_string()))
}

fn mutate(state: &AppState, mutation: Mutation, call: &ApiCall) -> Result<Vec<Action>> {
    let origin = state.route.screen();
    tracing::debug!(mutation = ?mutation, origin = ?origin, "submitting mutation");
    Ok(vec![state.request(RequestTag::Mutation { mutation, origin }, call)?])
}

fn own_profile(state: &mut AppState) -> Result<Vec<Action>> {
    let user_id = state.session.user_id().ok_or(LurkError::NotAuthenticated)?;
    change_screen(state, Route::Profile { user_id })
}

/// Likes or unlikes the selected feed job.
///
/// # Errors
///
/// Returns request construction errors.
pub fn toggle_like(state: &mut AppState) -> Result<Vec<Action>> {
    let Some(Selection::FeedJob { job_id, liked, .. }) = state.selection() else {
        return Ok(vec![]);
    };
    let turnon = !liked;
    mutate(state, Mutation::Like { job_id, turnon }, &ApiCall::LikeJob { id: job_id, turnon })
}

/// `w`: toggles watching the viewed user, or opens watch-by-email on the
/// dashboard. A no-op on one's own profile.
///
/// # Errors
///
/// Returns request construction errors.
pub fn watch(state: &mut AppState) -> Result<Vec<Action>> {
    match &state.route {
        Route::Dashboard => {
            state.popup = None;
            state.form = Some(Form::new(FormKind::Watch));
            Ok(vec![])
        }
        Route::Profile { .. } => {
            let Some(user) = state.viewed_user() else {
                return Ok(vec![]);
            };
            if state.session.is_self(user.id) {
                return Ok(vec![]);
            }
            let turnon = !user.is_watched_by(state.session.user_id());
            let call = ApiCall::WatchUser {
                email: user.email.clone(),
                turnon,
            };
            let mutation = Mutation::Watch {
                user_id: Some(user.id),
                turnon,
            };
            mutate(state, mutation, &call)
        }
        _ => Ok(vec![]),
    }
}

/// Opens the comment overlay for the selected feed job.
pub fn compose_comment(state: &mut AppState) {
    if let Some(Selection::FeedJob { job_id, .. }) = state.selection() {
        state.popup = None;
        state.form = Some(Form::new(FormKind::Comment { job_id }));
    }
}

/// Deletes the selected job on one's own profile.
///
/// # Errors
///
/// Returns request construction errors.
pub fn delete_selected_job(state: &mut AppState) -> Result<Vec<Action>> {
    let Some(Selection::ProfileJob { job, editable: true }) = state.selection() else {
        return Ok(vec![]);
    };
    mutate(state, Mutation::DeleteJob { job_id: job.id }, &ApiCall::DeleteJob { id: job.id })
}

/// Opens the update form for the selected job on one's own profile.
///
/// # Errors
///
/// See [`change_screen`].
pub fn edit_selected_job(state: &mut AppState) -> Result<Vec<Action>> {
    let Some(Selection::ProfileJob { job, editable: true }) = state.selection() else {
        return Ok(vec![]);
    };
    change_screen(state, Route::UpdateJob { job })
}

/// Posts a new job. Every field is required.
///
/// # Errors
///
/// Returns validation, image and request construction errors.
pub fn submit_new_job(state: &mut AppState, form: &Form) -> Result<Vec<Action>> {
    if form.any_blank(&[FieldKey::Title, FieldKey::Start, FieldKey::Description, FieldKey::Image]) {
        return Err(LurkError::Validation(MISSING_FIELDS.to_string()));
    }
    let job = NewJob {
        title: form.value(FieldKey::Title).to_string(),
        start: start_date(form.value(FieldKey::Start))?,
        description: form.value(FieldKey::Description).to_string(),
        image: file_to_data_url(form.value(FieldKey::Image))?,
    };
    mutate(state, Mutation::AddJob, &ApiCall::AddJob(job))
}

/// Updates a job with whichever fields were filled in.
///
/// # Errors
///
/// Returns validation, image and request construction errors.
pub fn submit_update_job(state: &mut AppState, form: &Form, job_id: JobId) -> Result<Vec<Action>> {
    let update = JobUpdate {
        id: job_id,
        title: form.non_empty(FieldKey::Title),
        start: form.non_empty(FieldKey::Start).map(|s| start_date(&s)).transpose()?,
        description: form.non_empty(FieldKey::Description),
        image: form.non_empty(FieldKey::Image).map(|p| file_to_data_url(&p)).transpose()?,
    };
    mutate(state, Mutation::UpdateJob { job_id }, &ApiCall::UpdateJob(update))
}

/// Updates the viewer's profile with whichever fields were filled in.
///
/// An empty form returns to the profile without a request.
///
/// # Errors
///
/// Returns image and request construction errors.
pub fn submit_update_profile(state: &mut AppState, form: &Form) -> Result<Vec<Action>> {
    let update = ProfileUpdate {
        email: form.non_empty(FieldKey::Email),
        password: form.non_empty(FieldKey::Password),
        name: form.non_empty(FieldKey::Name),
        image: form.non_empty(FieldKey::Image).map(|p| file_to_data_url(&p)).transpose()?,
    };
    if update.is_empty() {
        return own_profile(state);
    }
    mutate(state, Mutation::UpdateProfile, &ApiCall::UpdateProfile(update))
}

/// Adds a comment to a job.
///
/// # Errors
///
/// Returns validation and request construction errors.
pub fn submit_comment(state: &mut AppState, form: &Form, job_id: JobId) -> Result<Vec<Action>> {
    let comment = form
        .non_empty(FieldKey::Comment)
        .ok_or_else(|| LurkError::Validation(MISSING_FIELDS.to_string()))?;
    mutate(state, Mutation::Comment { job_id }, &ApiCall::AddComment { id: job_id, comment })
}

/// Starts watching the user with the typed email.
///
/// # Errors
///
/// Returns validation and request construction errors.
pub fn submit_watch(state: &mut AppState, form: &Form) -> Result<Vec<Action>> {
    let email = form
        .non_empty(FieldKey::Email)
        .ok_or_else(|| LurkError::Validation(MISSING_FIELDS.to_string()))?;
    let mutation = Mutation::Watch {
        user_id: None,
        turnon: true,
    };
    mutate(state, mutation, &ApiCall::WatchUser { email, turnon: true })
}

fn set_liked(state: &mut AppState, job_id: JobId, viewer: UserId, turnon: bool) {
    for entry in state.feed.entries.iter_mut().filter(|e| e.job.id == job_id) {
        entry.job.likes.retain(|like| like.user_id != viewer);
        if turnon {
            entry.job.likes.push(Like {
                user_id: viewer,
                user_name: String::new(),
            });
        }
    }
}

fn set_watching(state: &mut AppState, user_id: UserId, viewer: UserId, turnon: bool) {
    if let Some(data) = state.profile.data.as_mut().filter(|d| d.user.id == user_id) {
        data.user.watchee_user_ids.retain(|&id| id != viewer);
        if turnon {
            data.user.watchee_user_ids.push(viewer);
        }
    }
}

/// Handles the response to a mutation sent from `origin`.
///
/// # Errors
///
/// Returns the backend failure for the banner; nothing else changes.
pub fn on_mutation_response(
    state: &mut AppState,
    mutation: &Mutation,
    origin: ScreenId,
    status: u16,
    body: &[u8],
) -> Result<Vec<Action>> {
    if *mutation == Mutation::AddJob {
        let created = decode::<JobCreated>(status, body)?;
        tracing::debug!(job_id = created.id, "job posted");
    } else {
        decode::<Ack>(status, body)?;
        tracing::debug!(mutation = ?mutation, "mutation confirmed");
    }

    let viewer = state.session.user_id().ok_or(LurkError::NotAuthenticated)?;

    match *mutation {
        Mutation::Like { job_id, turnon } => set_liked(state, job_id, viewer, turnon),
        Mutation::Watch {
            user_id: Some(user_id),
            turnon,
        } => set_watching(state, user_id, viewer, turnon),
        _ => {}
    }

    if state.route.screen() != origin {
        tracing::debug!(origin = ?origin, current = ?state.route.screen(), "screen changed, skipping refresh");
        return Ok(vec![]);
    }

    match *mutation {
        Mutation::Like { .. } | Mutation::Watch { user_id: Some(_), .. } | Mutation::DeleteJob { .. } => reload(state),
        Mutation::Watch { user_id: None, .. } | Mutation::Comment { .. } => {
            state.form = None;
            reload(state)
        }
        Mutation::AddJob | Mutation::UpdateJob { .. } | Mutation::UpdateProfile => own_profile(state),
    }
}
