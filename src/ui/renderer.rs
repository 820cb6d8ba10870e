//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into
//! a [`ScreenViewModel`](crate::ui::viewmodel::ScreenViewModel), then the
//! components print it.
//!
//! # Example
//!
//! ```rust
//! use lurkforwork::api::ApiClient;
//! use lurkforwork::app::AppState;
//! use lurkforwork::ui::{render, Theme};
//!
//! let state = AppState::new(ApiClient::new("http://localhost:5005"), Theme::default());
//! render(&state, 24, 80, chrono::Utc::now());
//! ```

use crate::app::AppState;
use crate::ui::components;
use chrono::{DateTime, Utc};

/// Renders the plugin UI to stdout.
///
/// `now` drives the relative posting times on job cards.
pub fn render(state: &AppState, rows: usize, cols: usize, now: DateTime<Utc>) {
    let viewmodel = state.compute_viewmodel(rows, now);
    components::render_screen(&viewmodel, &state.theme, rows, cols);
}
