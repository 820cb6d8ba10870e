//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → ScreenViewModel → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`builders`]: Pure constructors for job items and watchee entries
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod builders;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, EmptyState, FeedView, FooterInfo, FormView, HeaderInfo, JobItemView, ProfileView,
    ScreenViewModel,
};
