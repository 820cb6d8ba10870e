//! Backend records consumed by the client.
//!
//! These mirror the JSON shapes returned by the LurkForWork backend. Nothing
//! here is cached across screens: every record is re-fetched on navigation.

use serde::{Deserialize, Serialize};

/// Backend identifier of a user.
pub type UserId = u64;

/// Backend identifier of a job posting.
pub type JobId = u64;

/// A like attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: String,
}

/// A comment attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: String,
    pub comment: String,
}

/// A job posting.
///
/// `start` and `created_at` are kept as the ISO-8601 strings the backend
/// sends; [`crate::domain::time`] parses them for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub created_at: String,
    pub creator_id: UserId,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Job {
    /// Whether `user_id` appears among this job's likes.
    #[must_use]
    pub fn is_liked_by(&self, user_id: Option<UserId>) -> bool {
        user_id.is_some_and(|id| self.likes.iter().any(|like| like.user_id == id))
    }
}

/// A user profile as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Users watching this user.
    #[serde(default, alias = "usersWhoWatchMeUserIds")]
    pub watchee_user_ids: Vec<UserId>,
}

impl User {
    /// Whether `viewer` is watching this user.
    #[must_use]
    pub fn is_watched_by(&self, viewer: Option<UserId>) -> bool {
        viewer.is_some_and(|id| self.watchee_user_ids.contains(&id))
    }
}
