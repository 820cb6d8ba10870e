//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single state container for the plugin.
//! It owns the session, the current route, the per-region load state and the
//! open form, and it is passed by reference to every handler.
//!
//! # State Components
//!
//! - **Session**: Token, user id, current screen and job page
//! - **Route**: Current screen plus its load parameters
//! - **Regions**: Feed and profile state with their request generations
//! - **Form**: Text-entry state for form screens and overlays
//! - **Selection**: Cursor over the rows of the current screen
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms state into a [`ScreenViewModel`],
//! windowing the list around the cursor to fit the terminal.

use super::banner::ErrorBanner;
use super::feed::{FeedEntry, FeedState, NO_JOBS_PLACEHOLDER};
use super::forms::{Form, FormKind};
use super::modes::{InputMode, Popup};
use super::profile::ProfileState;
use super::screen::Route;
use crate::api::{ApiCall, ApiClient, ApiRequest, RequestTag};
use crate::app::Action;
use crate::domain::error::Result;
use crate::domain::models::{Job, JobId, User, UserId};
use crate::domain::session::{ScreenId, Session};
use crate::ui::builders::{
    build_job_item, build_profile_job_item, build_watchee_entry, comments_popup, image_label,
    likes_popup, watchers_label,
};
use crate::ui::components::feed::CARD_ROWS;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, EmptyState, FeedView, FieldView, FooterInfo, FormView, HeaderInfo, ProfileView,
    ScreenViewModel,
};
use chrono::{DateTime, Utc};

/// Rows taken by chrome around the body: blank, header, border, banner, border, footer.
const CHROME_ROWS: usize = 6;

/// Rows above the profile's job list (name, email, image, watch, blank, heading).
const PROFILE_HEADER_ROWS: usize = 6;

/// The row under the cursor, as the keybindings see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A job on the dashboard.
    FeedJob {
        job_id: JobId,
        creator_id: UserId,
        liked: bool,
    },
    /// A job on a profile page.
    ProfileJob { job: Job, editable: bool },
    /// A watching user listed on a profile page.
    Watchee { user_id: UserId },
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session record: login state, current screen and job page.
    pub session: Session,

    /// Current screen and its parameters.
    pub route: Route,

    /// Shared error banner.
    pub error: ErrorBanner,

    /// Dashboard feed region.
    pub feed: FeedState,

    /// Profile region.
    pub profile: ProfileState,

    /// Open form: the body of form screens, or an overlay on the dashboard.
    pub form: Option<Form>,

    /// Zero-based cursor over the rows of the current screen.
    pub selected_index: usize,

    /// Open likes/comments list of the selected job.
    pub popup: Option<Popup>,

    /// Request builder for the configured backend.
    pub client: ApiClient,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: logged out, on the login screen.
    #[must_use]
    pub fn new(client: ApiClient, theme: Theme) -> Self {
        Self {
            session: Session::default(),
            route: Route::Login,
            error: ErrorBanner::default(),
            feed: FeedState::default(),
            profile: ProfileState::default(),
            form: Some(Form::new(FormKind::Login)),
            selected_index: 0,
            popup: None,
            client,
            theme,
        }
    }

    /// Builds a request action for `call` tagged with `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LurkError::NotAuthenticated`] for an authenticated call
    /// without a session token.
    pub fn request(&self, tag: RequestTag, call: &ApiCall) -> Result<Action> {
        let http = self.client.build(self.session.token(), call)?;
        tracing::debug!(op = call.name(), url = %http.url, "request built");
        Ok(Action::Request(ApiRequest { tag, http }))
    }

    /// How key presses are interpreted right now.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.form.is_some() {
            InputMode::Form
        } else {
            InputMode::Browse
        }
    }

    /// Rows the cursor can move over on the current screen.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.route {
            Route::Dashboard => self.feed.entries.len(),
            Route::Profile { .. } => self
                .profile
                .data
                .as_ref()
                .map_or(0, |d| d.user.jobs.len() + d.watchees.len()),
            _ => 0,
        }
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the cursor within the rows of the current screen.
    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        self.selected_index = if count == 0 {
            0
        } else {
            self.selected_index.min(count - 1)
        };
    }

    /// The feed entry under the cursor.
    #[must_use]
    pub fn selected_feed_entry(&self) -> Option<&FeedEntry> {
        match self.route {
            Route::Dashboard => self.feed.entries.get(self.selected_index),
            _ => None,
        }
    }

    /// The typed context of the row under the cursor.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        match &self.route {
            Route::Dashboard => self.selected_feed_entry().map(|entry| Selection::FeedJob {
                job_id: entry.job.id,
                creator_id: entry.job.creator_id,
                liked: entry.job.is_liked_by(self.session.user_id()),
            }),
            Route::Profile { .. } => {
                let data = self.profile.data.as_ref()?;
                let jobs = data.user.jobs.len();
                if self.selected_index < jobs {
                    let job = data.user.jobs[self.selected_index].clone();
                    let editable = self.session.is_self(job.creator_id);
                    Some(Selection::ProfileJob { job, editable })
                } else {
                    data.watchees
                        .get(self.selected_index - jobs)
                        .map(|u| Selection::Watchee { user_id: u.id })
                }
            }
            _ => None,
        }
    }

    /// The rendered profile, if it belongs to the current route.
    #[must_use]
    pub fn viewed_user(&self) -> Option<&User> {
        match self.route {
            Route::Profile { user_id } => self
                .profile
                .data
                .as_ref()
                .map(|d| &d.user)
                .filter(|u| u.id == user_id),
            _ => None,
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `now` - Clock used for relative posting times
    ///
    /// # Windowing Algorithm
    ///
    /// The feed and profile lists show as many rows as fit below the chrome,
    /// with the window centered on the cursor and pulled back near either end.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, now: DateTime<Utc>) -> ScreenViewModel {
        let available = rows.saturating_sub(CHROME_ROWS);

        let overlay = self
            .form
            .as_ref()
            .filter(|f| f.kind.is_overlay())
            .map(Self::compute_form);

        let body = match &self.route {
            Route::Dashboard => self.compute_feed_body(available, now),
            Route::Profile { .. } => self.compute_profile_body(available, now),
            _ => match self.form.as_ref().filter(|f| !f.kind.is_overlay()) {
                Some(form) => BodyView::Form(Self::compute_form(form)),
                None => BodyView::Empty(EmptyState {
                    message: self.route.screen().label().to_string(),
                    subtitle: String::new(),
                }),
            },
        };

        ScreenViewModel {
            header: self.compute_header(),
            error: self.error.message().map(str::to_string),
            body,
            overlay,
            footer: self.compute_footer(),
        }
    }

    fn compute_feed_body(&self, available: usize, now: DateTime<Utc>) -> BodyView {
        if self.feed.show_placeholder {
            return BodyView::Empty(EmptyState {
                message: NO_JOBS_PLACEHOLDER.to_string(),
                subtitle: "Watch a user with 'w' to see their jobs here".to_string(),
            });
        }
        if self.feed.entries.is_empty() {
            return BodyView::Empty(EmptyState {
                message: if self.feed.loading { "Loading jobs..." } else { "No jobs to show" }.to_string(),
                subtitle: String::new(),
            });
        }

        let per_screen = (available / CARD_ROWS).max(1);
        let (start, end) = window(self.selected_index, self.feed.entries.len(), per_screen);
        let viewer = self.session.user_id();

        let items = self.feed.entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let mut item = build_job_item(&entry.job, &entry.creator, viewer, now);
                item.is_selected = start + offset == self.selected_index;
                item
            })
            .collect();

        let popup = self.popup.and_then(|popup| {
            let entry = self.selected_feed_entry()?;
            Some(match popup {
                Popup::Likes => likes_popup(&entry.job),
                Popup::Comments => comments_popup(&entry.job),
            })
        });

        BodyView::Feed(FeedView {
            items,
            page: self.session.current_job_page,
            has_prev: self.session.current_job_page > 1,
            has_next: self.feed.has_next,
            loading: self.feed.loading,
            popup,
        })
    }

    fn compute_profile_body(&self, available: usize, now: DateTime<Utc>) -> BodyView {
        let Some(user) = self.viewed_user() else {
            return BodyView::Empty(EmptyState {
                message: "Loading profile...".to_string(),
                subtitle: String::new(),
            });
        };
        let watchees = self.profile.data.as_ref().map_or(&[][..], |d| d.watchees.as_slice());
        let viewer = self.session.user_id();
        let is_self = self.session.is_self(user.id);

        let total = user.jobs.len() + watchees.len();
        let per_screen = available.saturating_sub(PROFILE_HEADER_ROWS).max(1);
        let (start, end) = window(self.selected_index, total, per_screen);

        let jobs = user
            .jobs
            .iter()
            .enumerate()
            .filter(|(i, _)| (start..end).contains(i))
            .map(|(i, job)| {
                let mut item = build_profile_job_item(job, viewer, now);
                item.is_selected = i == self.selected_index;
                item
            })
            .collect();

        let offset = user.jobs.len();
        let watchees = watchees
            .iter()
            .enumerate()
            .filter(|(i, _)| (start..end).contains(&(offset + i)))
            .map(|(i, u)| {
                let mut entry = build_watchee_entry(u);
                entry.is_selected = offset + i == self.selected_index;
                entry
            })
            .collect();

        let watch_label = (!is_self).then(|| {
            if user.is_watched_by(viewer) { "Unwatch" } else { "Watch" }.to_string()
        });

        BodyView::Profile(ProfileView {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image: image_label(user.image.as_deref().unwrap_or_default()),
            is_self,
            watch_label,
            watchers_label: watchers_label(user),
            jobs,
            watchees,
            loading: self.profile.loading,
        })
    }

    fn compute_form(form: &Form) -> FormView {
        FormView {
            title: form.kind.title().to_string(),
            fields: form
                .fields
                .iter()
                .enumerate()
                .map(|(i, field)| FieldView {
                    label: field.key.label().to_string(),
                    value: if field.key.is_secret() {
                        "*".repeat(field.value.chars().count())
                    } else {
                        field.value.clone()
                    },
                    is_focused: i == form.focus,
                })
                .collect(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let screen = self.route.screen();
        let title = match screen {
            ScreenId::Dashboard => format!(" {} (page {}) ", screen.title(), self.session.current_job_page),
            ScreenId::Profile => match self.viewed_user() {
                Some(user) => format!(" {}: {} ", screen.title(), user.name),
                None => format!(" {} ", screen.title()),
            },
            _ => format!(" {} ", screen.title()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.route, self.input_mode()) {
            (Route::Login | Route::Register, _) => {
                "Tab/Up/Down: field  Enter: submit  Ctrl+l: login  Ctrl+r: register  Esc: close"
            }
            (_, InputMode::Form) => "Tab/Up/Down: field  Enter: submit  Esc: cancel",
            (Route::Dashboard, InputMode::Browse) => {
                "j/k: move  n/p: page  l: like  L: likes  c: comments  C: comment  Enter: poster  w: watch  a: new job  m: me  r: reload  q: quit"
            }
            (Route::Profile { .. }, InputMode::Browse) if self.viewed_user().is_some_and(|u| self.session.is_self(u.id)) => {
                "j/k: move  Enter: open  e: edit job  d: delete job  u: update profile  a: new job  b: dashboard  q: quit"
            }
            (Route::Profile { .. }, InputMode::Browse) => {
                "j/k: move  Enter: open  w: watch/unwatch  m: me  b: dashboard  r: reload  q: quit"
            }
            _ => "b: dashboard  m: me  q: quit",
        };
        let keybindings = if self.error.is_visible() {
            format!("x: dismiss error  {keybindings}")
        } else {
            keybindings.to_string()
        };
        FooterInfo { keybindings }
    }
}

/// Window of `per_screen` rows out of `total`, centered on `selected`.
fn window(selected: usize, total: usize, per_screen: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(per_screen / 2);
    let end = (start + per_screen).min(total);
    if end - start < per_screen && total >= per_screen {
        start = end.saturating_sub(per_screen);
    }
    (start, end)
}
