//! Profile loader.
//!
//! Loads one user, then resolves the names of the users watching them in a
//! batch. The profile view is replaced wholesale once every lookup has
//! resolved, so loading the same profile twice renders the same view.

use super::actions::Action;
use super::state::AppState;
use crate::api::{decode, ApiCall, RequestTag};
use crate::domain::error::{ApiError, Result};
use crate::domain::models::{User, UserId};
use std::collections::{HashMap, HashSet};

/// A fully resolved profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub user: User,
    /// Watching users, in the order the backend lists them.
    pub watchees: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingProfile {
    user: User,
    waiting: HashSet<UserId>,
    watchees: HashMap<UserId, User>,
    failure: Option<ApiError>,
}

/// Profile region state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub data: Option<ProfileData>,
    pub loading: bool,
    generation: u64,
    pending: Option<PendingProfile>,
}

impl ProfileState {
    /// Id of the rendered profile, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.data.as_ref().map(|d| d.user.id)
    }

    fn abort(&mut self) {
        self.pending = None;
        self.loading = false;
    }
}

/// Requests a profile under a fresh generation.
///
/// A profile of a different user is cleared right away so the previous
/// user's details never show under the new route.
///
/// # Errors
///
/// Returns [`crate::LurkError::NotAuthenticated`] without a session token.
pub fn load_profile(state: &mut AppState, user_id: UserId) -> Result<Vec<Action>> {
    if state.profile.user_id() != Some(user_id) {
        state.profile.data = None;
    }
    state.profile.generation += 1;
    state.profile.pending = None;
    state.profile.loading = true;
    let generation = state.profile.generation;

    tracing::debug!(user_id, generation, "loading profile");

    match state.request(RequestTag::Profile { generation, user_id }, &ApiCall::User { user_id }) {
        Ok(action) => Ok(vec![action]),
        Err(e) => {
            state.profile.abort();
            Err(e)
        }
    }
}

fn finish(state: &mut AppState, pending: PendingProfile) -> Result<Vec<Action>> {
    let PendingProfile {
        user,
        watchees: mut resolved,
        failure,
        ..
    } = pending;

    let watchees = user
        .watchee_user_ids
        .iter()
        .filter_map(|id| resolved.remove(id))
        .collect();

    state.profile.data = Some(ProfileData { user, watchees });
    state.profile.loading = false;
    state.clamp_selection();

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(vec![]),
    }
}

/// Handles the response to a profile request.
///
/// # Errors
///
/// Backend failures are returned for the banner and leave the view as it was.
pub fn on_profile_response(
    state: &mut AppState,
    generation: u64,
    user_id: UserId,
    status: u16,
    body: &[u8],
) -> Result<Vec<Action>> {
    if generation != state.profile.generation {
        tracing::debug!(generation, user_id, "discarding stale profile");
        return Ok(vec![]);
    }

    let user = match decode::<User>(status, body) {
        Ok(user) => user,
        Err(e) => {
            state.profile.abort();
            return Err(e.into());
        }
    };

    let mut order = Vec::new();
    let mut waiting = HashSet::new();
    for &id in &user.watchee_user_ids {
        if waiting.insert(id) {
            order.push(id);
        }
    }

    let pending = PendingProfile {
        user,
        waiting,
        watchees: HashMap::new(),
        failure: None,
    };

    if order.is_empty() {
        return finish(state, pending);
    }
    state.profile.pending = Some(pending);

    let mut actions = Vec::with_capacity(order.len());
    for id in order {
        match state.request(
            RequestTag::Watchee { generation, user_id: id },
            &ApiCall::User { user_id: id },
        ) {
            Ok(action) => actions.push(action),
            Err(e) => {
                state.profile.abort();
                return Err(e);
            }
        }
    }
    Ok(actions)
}

/// Handles one watchee lookup. Renders the profile once the last resolves.
///
/// # Errors
///
/// Returns the last lookup failure after rendering without that watchee.
pub fn on_watchee_response(
    state: &mut AppState,
    generation: u64,
    user_id: UserId,
    status: u16,
    body: &[u8],
) -> Result<Vec<Action>> {
    if generation != state.profile.generation {
        tracing::debug!(generation, user_id, "discarding stale watchee");
        return Ok(vec![]);
    }
    let Some(pending) = state.profile.pending.as_mut() else {
        return Ok(vec![]);
    };
    if !pending.waiting.remove(&user_id) {
        return Ok(vec![]);
    }

    match decode::<User>(status, body) {
        Ok(user) => {
            pending.watchees.insert(user_id, user);
        }
        Err(e) => {
            tracing::debug!(user_id, error = %e, "watchee lookup failed");
            pending.failure = Some(e);
        }
    }

    if !pending.waiting.is_empty() {
        return Ok(vec![]);
    }

    match state.profile.pending.take() {
        Some(done) => finish(state, done),
        None => Ok(vec![]),
    }
}
