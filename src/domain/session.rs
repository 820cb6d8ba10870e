//! In-memory session state.
//!
//! A single [`Session`] is owned by the application state and passed by
//! reference to every handler. It is never persisted.

use super::models::UserId;
use serde::{Deserialize, Serialize};

/// The fixed set of screens the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    Login,
    Register,
    Dashboard,
    Profile,
    UpdateProfile,
    NewJob,
    UpdateJob,
}

impl ScreenId {
    /// Whether the screen needs a logged-in session.
    ///
    /// Login and register are the only screens reachable while logged out,
    /// and they become unreachable once logged in.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Human-readable screen name used in titles and the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
            Self::UpdateProfile => "Update Profile",
            Self::NewJob => "New Job",
            Self::UpdateJob => "Update Job",
        }
    }

    /// Pane title shown while this screen is current.
    #[must_use]
    pub fn title(self) -> String {
        format!("LurkForWork - {}", self.label())
    }
}

/// Authentication part of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub is_logged_in: bool,
    pub token: Option<String>,
    pub user_id: Option<UserId>,
}

/// Process-wide session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserSession,
    pub current_screen: ScreenId,
    /// 1-indexed page currently shown on the dashboard.
    pub current_job_page: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: UserSession::default(),
            current_screen: ScreenId::Login,
            current_job_page: 1,
        }
    }
}

impl Session {
    /// Records a successful login or registration.
    pub fn sign_in(&mut self, token: String, user_id: UserId) {
        self.user = UserSession {
            is_logged_in: true,
            token: Some(token),
            user_id: Some(user_id),
        };
        self.current_job_page = 1;
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user.token.as_deref()
    }

    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user.user_id
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_logged_in
    }

    /// Whether `user_id` is the logged-in user.
    #[must_use]
    pub fn is_self(&self, user_id: UserId) -> bool {
        self.user.user_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_logged_out_on_login() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.current_screen, ScreenId::Login);
        assert_eq!(session.current_job_page, 1);
        assert!(session.token().is_none());
    }

    #[test]
    fn sign_in_stores_credentials() {
        let mut session = Session::default();
        session.current_job_page = 4;
        session.sign_in("tok".into(), 42);
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("tok"));
        assert!(session.is_self(42));
        assert_eq!(session.current_job_page, 1);
    }

    #[test]
    fn only_login_and_register_are_public() {
        assert!(!ScreenId::Login.requires_auth());
        assert!(!ScreenId::Register.requires_auth());
        assert!(ScreenId::Dashboard.requires_auth());
        assert!(ScreenId::UpdateJob.requires_auth());
        assert_eq!(ScreenId::Dashboard.title(), "LurkForWork - Dashboard");
    }
}
