//! Dashboard feed paginator.
//!
//! A page load runs in two phases. The page request returns the jobs, then
//! every distinct creator is fetched in parallel. The list is replaced once,
//! in feed order, after the last creator resolves.
//!
//! Every load bumps the feed generation. Responses stamped with an older
//! generation are dropped, so a slow earlier page can never overwrite a
//! later one. Responses that arrive after the dashboard was left are dropped
//! too; coming back starts a fresh load.

use super::actions::Action;
use super::screen::Route;
use super::state::AppState;
use crate::api::{decode, ApiCall, RequestTag, PAGE_SIZE};
use crate::domain::error::{ApiError, Result};
use crate::domain::models::{Job, User, UserId};
use std::collections::{HashMap, HashSet};

/// Placeholder shown when the first page is empty.
pub const NO_JOBS_PLACEHOLDER: &str = "No jobs watched";

/// A job together with its resolved creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub job: Job,
    pub creator: User,
}

/// A page whose creators are still resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPage {
    page: u32,
    jobs: Vec<Job>,
    waiting: HashSet<UserId>,
    creators: HashMap<UserId, User>,
    failure: Option<ApiError>,
}

/// Feed region state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Rendered entries, in feed order.
    pub entries: Vec<FeedEntry>,
    /// Whether the empty-feed placeholder replaces the list.
    pub show_placeholder: bool,
    /// Whether the last rendered page was full.
    pub has_next: bool,
    /// A page load is in flight.
    pub loading: bool,
    generation: u64,
    pending: Option<PendingPage>,
}

impl FeedState {
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.pending = None;
        self.loading = true;
        self.generation
    }

    const fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    fn abort(&mut self) {
        self.pending = None;
        self.loading = false;
    }
}

/// Drops an in-flight load once the dashboard is no longer shown.
fn left_dashboard(state: &mut AppState) -> bool {
    if state.route == Route::Dashboard {
        return false;
    }
    tracing::debug!(route = ?state.route.screen(), "dropping feed response off the dashboard");
    state.feed.abort();
    true
}

/// Requests a page of the feed under a fresh generation.
///
/// The displayed list stays as it is until the page and all of its creators
/// have resolved.
///
/// # Errors
///
/// Returns [`crate::LurkError::NotAuthenticated`] without a session token.
pub fn load_feed_page(state: &mut AppState, page: u32) -> Result<Vec<Action>> {
    let page = page.max(1);
    let generation = state.feed.begin();
    tracing::debug!(page, generation, "loading feed page");

    match state.request(RequestTag::Feed { generation, page }, &ApiCall::JobFeed { page }) {
        Ok(action) => Ok(vec![action]),
        Err(e) => {
            state.feed.abort();
            Err(e)
        }
    }
}

/// Moves to the next page. A no-op after a short page.
///
/// # Errors
///
/// See [`load_feed_page`].
pub fn next_page(state: &mut AppState) -> Result<Vec<Action>> {
    if !state.feed.has_next {
        tracing::debug!(page = state.session.current_job_page, "no next page");
        return Ok(vec![]);
    }
    let page = state.session.current_job_page + 1;
    load_feed_page(state, page)
}

/// Moves to the previous page. A no-op on page 1.
///
/// # Errors
///
/// See [`load_feed_page`].
pub fn prev_page(state: &mut AppState) -> Result<Vec<Action>> {
    if state.session.current_job_page <= 1 {
        return Ok(vec![]);
    }
    let page = state.session.current_job_page - 1;
    load_feed_page(state, page)
}

/// Handles the response to a page request.
///
/// # Errors
///
/// Backend failures and creator request failures are returned for the
/// banner; the displayed list is left unchanged.
pub fn on_feed_response(
    state: &mut AppState,
    generation: u64,
    page: u32,
    status: u16,
    body: &[u8],
) -> Result<Vec<Action>> {
    if !state.feed.is_current(generation) {
        tracing::debug!(generation, current = state.feed.generation, "discarding stale feed page");
        return Ok(vec![]);
    }
    if left_dashboard(state) {
        return Ok(vec![]);
    }

    let jobs = match decode::<Vec<Job>>(status, body) {
        Ok(jobs) => jobs,
        Err(e) => {
            state.feed.abort();
            return Err(e.into());
        }
    };

    tracing::debug!(page, job_count = jobs.len(), "feed page received");

    if jobs.is_empty() {
        state.feed.abort();
        state.feed.has_next = false;
        if page == 1 {
            state.feed.entries.clear();
            state.feed.show_placeholder = true;
            state.session.current_job_page = 1;
            state.selected_index = 0;
        }
        return Ok(vec![]);
    }

    let mut order = Vec::new();
    let mut waiting = HashSet::new();
    for job in &jobs {
        if waiting.insert(job.creator_id) {
            order.push(job.creator_id);
        }
    }

    state.feed.pending = Some(PendingPage {
        page,
        jobs,
        waiting,
        creators: HashMap::new(),
        failure: None,
    });

    let mut actions = Vec::with_capacity(order.len());
    for user_id in order {
        match state.request(RequestTag::Creator { generation, user_id }, &ApiCall::User { user_id }) {
            Ok(action) => actions.push(action),
            Err(e) => {
                state.feed.abort();
                return Err(e);
            }
        }
    }
    Ok(actions)
}

/// Handles one creator lookup. Renders the page once the last one resolves.
///
/// # Errors
///
/// Returns the last creator failure once the page has been rendered without
/// the affected jobs.
pub fn on_creator_response(
    state: &mut AppState,
    generation: u64,
    user_id: UserId,
    status: u16,
    body: &[u8],
) -> Result<Vec<Action>> {
    if !state.feed.is_current(generation) {
        tracing::debug!(generation, user_id, "discarding stale creator");
        return Ok(vec![]);
    }
    if left_dashboard(state) {
        return Ok(vec![]);
    }
    let Some(pending) = state.feed.pending.as_mut() else {
        return Ok(vec![]);
    };
    if !pending.waiting.remove(&user_id) {
        return Ok(vec![]);
    }

    match decode::<User>(status, body) {
        Ok(user) => {
            pending.creators.insert(user_id, user);
        }
        Err(e) => {
            tracing::debug!(user_id, error = %e, "creator lookup failed");
            pending.failure = Some(e);
        }
    }

    if !pending.waiting.is_empty() {
        return Ok(vec![]);
    }

    let Some(done) = state.feed.pending.take() else {
        return Ok(vec![]);
    };
    state.feed.loading = false;

    let returned = done.jobs.len();
    let previous_page = state.session.current_job_page;

    state.feed.entries = done
        .jobs
        .into_iter()
        .filter_map(|job| {
            let creator = done.creators.get(&job.creator_id)?.clone();
            Some(FeedEntry { job, creator })
        })
        .collect();
    state.feed.show_placeholder = false;
    state.feed.has_next = returned == PAGE_SIZE as usize;
    state.session.current_job_page = done.page;

    if previous_page != done.page {
        state.selected_index = 0;
    }
    state.clamp_selection();

    tracing::debug!(
        page = done.page,
        rendered = state.feed.entries.len(),
        has_next = state.feed.has_next,
        "feed page rendered"
    );

    match done.failure {
        Some(e) => Err(e.into()),
        None => Ok(vec![]),
    }
}
