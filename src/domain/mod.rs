//! Domain layer for the LurkForWork plugin.
//!
//! Core types independent of Zellij APIs: backend records, the session, error
//! types and date formatting.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`models`]: Job and user records
//! - [`session`]: Logged-in user and current screen
//! - [`time`]: Relative and calendar date formatting

pub mod error;
pub mod models;
pub mod session;
pub mod time;

pub use error::{ApiError, LurkError, Result};
pub use models::{Comment, Job, JobId, Like, User, UserId};
pub use session::{ScreenId, Session, UserSession};
