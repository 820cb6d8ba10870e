//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models carry display-ready text plus the
//! typed ids the keybindings act on, so nothing needs to be recovered from
//! rendered output.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic.
//!
//! # Example
//!
//! ```rust
//! use lurkforwork::ui::viewmodel::{BodyView, EmptyState, FooterInfo, HeaderInfo, ScreenViewModel};
//!
//! let vm = ScreenViewModel {
//!     header: HeaderInfo { title: "LurkForWork - Dashboard".to_string() },
//!     error: None,
//!     body: BodyView::Empty(EmptyState {
//!         message: "No jobs watched".to_string(),
//!         subtitle: "Watch someone to see their jobs".to_string(),
//!     }),
//!     overlay: None,
//!     footer: FooterInfo { keybindings: "q: close".to_string() },
//! };
//! assert!(vm.error.is_none());
//! ```

use crate::domain::models::{JobId, UserId};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    /// Header information (screen title).
    pub header: HeaderInfo,

    /// Text of the error banner, when visible.
    pub error: Option<String>,

    /// Main content of the current screen.
    pub body: BodyView,

    /// Form drawn over the body (comment or watch-by-email).
    pub overlay: Option<FormView>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Content region of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Feed(FeedView),
    Profile(ProfileView),
    Form(FormView),
    Empty(EmptyState),
}

/// The dashboard job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    /// Visible window of job items.
    pub items: Vec<JobItemView>,
    /// 1-indexed page number.
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub loading: bool,
    /// Likes or comments list of the selected job.
    pub popup: Option<PopupView>,
}

/// One job in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobItemView {
    pub job_id: JobId,
    pub creator_id: UserId,
    pub title: String,
    pub poster: String,
    /// `"Posted: ..."`
    pub posted: String,
    /// `"Start date: dd/mm/yyyy"`
    pub start: String,
    pub image: String,
    pub description: String,
    pub liked: bool,
    pub like_glyph: char,
    /// `"N like(s)"`
    pub likes_label: String,
    /// `"N comment(s)"`
    pub comments_label: String,
    pub is_selected: bool,
}

/// A likes or comments list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub title: String,
    pub lines: Vec<String>,
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub image: String,
    pub is_self: bool,
    /// `"Watch"` / `"Unwatch"` on other users' profiles.
    pub watch_label: Option<String>,
    /// `"Watched by N user(s)"`
    pub watchers_label: String,
    pub jobs: Vec<ProfileJobView>,
    pub watchees: Vec<WatcheeEntryView>,
    pub loading: bool,
}

/// One job on a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileJobView {
    pub job_id: JobId,
    pub title: String,
    pub posted: String,
    pub start: String,
    pub image: String,
    pub description: String,
    /// The viewer created this job and may update or delete it.
    pub editable: bool,
    pub is_selected: bool,
}

/// One watching user listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcheeEntryView {
    pub user_id: UserId,
    pub name: String,
    pub is_selected: bool,
}

/// An editable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FieldView>,
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: String,
    /// Display value; masked for secret fields.
    pub value: String,
    pub is_focused: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs watched").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
