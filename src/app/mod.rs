//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! API layers. Nothing in it touches the host: requests leave as
//! [`Action::Request`] and their responses come back as
//! [`Event::ApiResponse`].
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Backend Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`auth`]: Login and registration
//! - [`banner`]: The shared error banner
//! - [`feed`]: Dashboard paginator with batched creator lookups
//! - [`forms`]: Form field state
//! - [`handler`]: Event processing and dispatch
//! - [`modes`]: Input mode and popup types
//! - [`mutations`]: Like, watch, comment and job/profile edits
//! - [`navigation`]: Transition function and screen changes
//! - [`profile`]: Profile loader with batched watchee lookups
//! - [`screen`]: Routes and navigation targets
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod auth;
pub mod banner;
pub mod feed;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod mutations;
pub mod navigation;
pub mod profile;
pub mod screen;
pub mod state;

pub use actions::Action;
pub use banner::ErrorBanner;
pub use feed::{FeedEntry, FeedState, NO_JOBS_PLACEHOLDER};
pub use forms::{FieldKey, Form, FormKind};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Popup};
pub use navigation::{change_screen, transition, LoadEffect, NavError, Transition};
pub use profile::{ProfileData, ProfileState};
pub use screen::{NavTarget, Route, ScreenId};
pub use state::{AppState, Selection};
