//! Screen registry.
//!
//! A [`Route`] is a [`ScreenId`] plus whatever the screen needs to load
//! itself. Exactly one route is current at any time.

pub use crate::domain::session::ScreenId;
use crate::domain::models::{Job, UserId};

/// A screen together with its load parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Profile { user_id: UserId },
    UpdateProfile,
    NewJob,
    UpdateJob { job: Job },
}

impl Route {
    #[must_use]
    pub const fn screen(&self) -> ScreenId {
        match self {
            Self::Login => ScreenId::Login,
            Self::Register => ScreenId::Register,
            Self::Dashboard => ScreenId::Dashboard,
            Self::Profile { .. } => ScreenId::Profile,
            Self::UpdateProfile => ScreenId::UpdateProfile,
            Self::NewJob => ScreenId::NewJob,
            Self::UpdateJob { .. } => ScreenId::UpdateJob,
        }
    }
}

/// Navigation targets reachable from keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Register,
    Dashboard,
    MyProfile,
    NewJob,
}
