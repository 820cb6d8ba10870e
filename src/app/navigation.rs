//! Screen navigation.
//!
//! Navigation is split into a pure transition function and an effect runner.
//! [`transition`] decides whether a move is allowed and what the destination
//! needs loaded; [`change_screen`] applies it to [`AppState`] and runs the
//! load.
//!
//! Re-entering the current route is how screens reload after a mutation.

use super::actions::Action;
use super::feed::load_feed_page;
use super::forms::{FieldKey, Form, FormKind};
use super::profile::load_profile;
use super::screen::{NavTarget, Route};
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::models::{Job, UserId};
use crate::domain::session::{ScreenId, Session};
use crate::domain::time::format_iso_date;
use thiserror::Error;

/// Data a destination needs before it can be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEffect {
    LoadFeed { page: u32 },
    LoadProfile { user_id: UserId },
    PrefillProfileForm,
    PrefillJobForm { job: Job },
    BlankForm(FormKind),
}

/// Outcome of an allowed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub route: Route,
    pub effect: Option<LoadEffect>,
    /// The destination is the current route.
    pub reload: bool,
}

/// A transition denied by the login guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("{} requires login", .0.label())]
    RequiresLogin(ScreenId),
    #[error("{} is unavailable while logged in", .0.label())]
    AlreadyLoggedIn(ScreenId),
}

/// Decides a transition from `current` to `target`.
///
/// # Errors
///
/// Returns [`NavError`] when the login guard denies the destination.
pub fn transition(current: &Route, target: Route, session: &Session) -> std::result::Result<Transition, NavError> {
    let screen = target.screen();
    if screen.requires_auth() && !session.is_logged_in() {
        return Err(NavError::RequiresLogin(screen));
    }
    if !screen.requires_auth() && session.is_logged_in() {
        return Err(NavError::AlreadyLoggedIn(screen));
    }

    let effect = match &target {
        Route::Login => LoadEffect::BlankForm(FormKind::Login),
        Route::Register => LoadEffect::BlankForm(FormKind::Register),
        Route::Dashboard => LoadEffect::LoadFeed {
            page: session.current_job_page,
        },
        Route::Profile { user_id } => LoadEffect::LoadProfile { user_id: *user_id },
        Route::UpdateProfile => LoadEffect::PrefillProfileForm,
        Route::NewJob => LoadEffect::BlankForm(FormKind::NewJob),
        Route::UpdateJob { job } => LoadEffect::PrefillJobForm { job: job.clone() },
    };

    Ok(Transition {
        reload: *current == target,
        route: target,
        effect: Some(effect),
    })
}

/// Resolves a keybinding target to a route.
///
/// # Errors
///
/// `MyProfile` needs a logged-in user id.
pub fn resolve(target: NavTarget, session: &Session) -> std::result::Result<Route, NavError> {
    Ok(match target {
        NavTarget::Login => Route::Login,
        NavTarget::Register => Route::Register,
        NavTarget::Dashboard => Route::Dashboard,
        NavTarget::NewJob => Route::NewJob,
        NavTarget::MyProfile => {
            let user_id = session.user_id().ok_or(NavError::RequiresLogin(ScreenId::Profile))?;
            Route::Profile { user_id }
        }
    })
}

fn run_effect(state: &mut AppState, effect: LoadEffect) -> Result<Vec<Action>> {
    match effect {
        LoadEffect::LoadFeed { page } => {
            state.form = None;
            load_feed_page(state, page)
        }
        LoadEffect::LoadProfile { user_id } => {
            state.form = None;
            load_profile(state, user_id)
        }
        LoadEffect::PrefillProfileForm => {
            let values = state
                .profile
                .data
                .as_ref()
                .filter(|d| state.session.is_self(d.user.id))
                .map(|d| vec![(FieldKey::Name, d.user.name.clone()), (FieldKey::Email, d.user.email.clone())])
                .unwrap_or_default();
            state.form = Some(Form::with_values(FormKind::UpdateProfile, &values));
            Ok(vec![])
        }
        LoadEffect::PrefillJobForm { job } => {
            state.form = Some(Form::with_values(
                FormKind::UpdateJob { job_id: job.id },
                &[
                    (FieldKey::Title, job.title),
                    (FieldKey::Start, format_iso_date(&job.start)),
                    (FieldKey::Description, job.description),
                ],
            ));
            Ok(vec![])
        }
        LoadEffect::BlankForm(kind) => {
            state.form = Some(Form::new(kind));
            Ok(vec![])
        }
    }
}

/// Moves to `target`, running its load effect.
///
/// Steps, in order: guard, hide the error banner, run the effect, replace
/// the route, record the screen in the session, reset the cursor (on a route
/// change) and the popup, then rename the pane. A denied transition is
/// logged and ignored.
///
/// # Errors
///
/// Returns errors raised while building the load requests.
pub fn change_screen(state: &mut AppState, target: Route) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("change_screen", from = ?state.route.screen(), to = ?target.screen()).entered();

    let transition = match transition(&state.route, target, &state.session) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(reason = %e, "navigation denied");
            return Ok(vec![]);
        }
    };

    state.error.hide();

    let mut actions = match transition.effect {
        Some(effect) => run_effect(state, effect)?,
        None => vec![],
    };

    let screen = transition.route.screen();
    state.route = transition.route;
    state.session.current_screen = screen;
    if transition.reload {
        state.clamp_selection();
    } else {
        state.selected_index = 0;
    }
    state.popup = None;

    actions.push(Action::SetTitle(screen.title()));
    Ok(actions)
}

/// Moves to a keybinding target.
///
/// # Errors
///
/// See [`change_screen`].
pub fn navigate(state: &mut AppState, target: NavTarget) -> Result<Vec<Action>> {
    match resolve(target, &state.session) {
        Ok(route) => change_screen(state, route),
        Err(e) => {
            tracing::debug!(reason = %e, "navigation denied");
            Ok(vec![])
        }
    }
}

/// Re-enters the current route.
///
/// # Errors
///
/// See [`change_screen`].
pub fn reload(state: &mut AppState) -> Result<Vec<Action>> {
    let route = state.route.clone();
    change_screen(state, route)
}
