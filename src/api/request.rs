//! Request construction for the LurkForWork backend.
//!
//! [`ApiClient`] turns a typed [`ApiCall`] into a host-agnostic [`HttpRequest`].
//! It performs no I/O: the plugin shim hands the request to Zellij's
//! `web_request`, and the response returns later as an event.

use crate::domain::error::{LurkError, Result};
use crate::domain::models::{JobId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully-resolved request ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Parses the body back into JSON, `None` for bodiless requests.
    #[must_use]
    pub fn json_body(&self) -> Option<serde_json::Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }
}

/// Partial profile update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.name.is_none() && self.image.is_none()
    }
}

/// Payload of `POST /job`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub image: String,
    pub start: String,
    pub description: String,
}

/// Payload of `PUT /job`; only `id` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub id: JobId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Every backend operation the client issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { email: String, password: String },
    Register { email: String, password: String, name: String },
    JobFeed { page: u32 },
    User { user_id: UserId },
    LikeJob { id: JobId, turnon: bool },
    UpdateProfile(ProfileUpdate),
    WatchUser { email: String, turnon: bool },
    AddJob(NewJob),
    UpdateJob(JobUpdate),
    DeleteJob { id: JobId },
    AddComment { id: JobId, comment: String },
}

impl ApiCall {
    /// Whether the call needs a bearer token.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Register { .. })
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::Login { .. } | Self::Register { .. } | Self::AddJob(_) | Self::AddComment { .. } => {
                HttpMethod::Post
            }
            Self::JobFeed { .. } | Self::User { .. } => HttpMethod::Get,
            Self::LikeJob { .. } | Self::UpdateProfile(_) | Self::WatchUser { .. } | Self::UpdateJob(_) => {
                HttpMethod::Put
            }
            Self::DeleteJob { .. } => HttpMethod::Delete,
        }
    }

    /// Short operation name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::JobFeed { .. } => "get_job_feed",
            Self::User { .. } => "get_user",
            Self::LikeJob { .. } => "like_job",
            Self::UpdateProfile(_) => "update_profile",
            Self::WatchUser { .. } => "watch_user",
            Self::AddJob(_) => "add_job",
            Self::UpdateJob(_) => "update_job",
            Self::DeleteJob { .. } => "delete_job",
            Self::AddComment { .. } => "add_comment",
        }
    }

    fn body(&self) -> Result<Vec<u8>> {
        use serde_json::json;

        let value = match self {
            Self::JobFeed { .. } | Self::User { .. } => return Ok(Vec::new()),
            Self::Login { email, password } => json!({ "email": email, "password": password }),
            Self::Register { email, password, name } => {
                json!({ "email": email, "password": password, "name": name })
            }
            Self::LikeJob { id, turnon } => json!({ "id": id, "turnon": turnon }),
            Self::UpdateProfile(update) => serde_json::to_value(update)?,
            Self::WatchUser { email, turnon } => json!({ "email": email, "turnon": turnon }),
            Self::AddJob(job) => serde_json::to_value(job)?,
            Self::UpdateJob(update) => serde_json::to_value(update)?,
            Self::DeleteJob { id } => json!({ "id": id }),
            Self::AddComment { id, comment } => json!({ "id": id, "comment": comment }),
        };
        Ok(serde_json::to_vec(&value)?)
    }
}

/// Jobs per feed page. The backend always answers `GET /job/feed` with at
/// most this many jobs, so it is not configurable.
pub const PAGE_SIZE: u32 = 5;

/// Builds requests against one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Feed offset of a 1-indexed page.
    #[must_use]
    pub const fn feed_offset(page: u32) -> u32 {
        page.saturating_sub(1) * PAGE_SIZE
    }

    fn path(&self, call: &ApiCall) -> String {
        match call {
            ApiCall::Login { .. } => "/auth/login".to_string(),
            ApiCall::Register { .. } => "/auth/register".to_string(),
            ApiCall::JobFeed { page } => format!("/job/feed?start={}", Self::feed_offset(*page)),
            ApiCall::User { user_id } => format!("/user?userId={user_id}"),
            ApiCall::LikeJob { .. } => "/job/like".to_string(),
            ApiCall::UpdateProfile(_) => "/user".to_string(),
            ApiCall::WatchUser { .. } => "/user/watch".to_string(),
            ApiCall::AddJob(_) | ApiCall::UpdateJob(_) | ApiCall::DeleteJob { .. } => "/job".to_string(),
            ApiCall::AddComment { .. } => "/job/comment".to_string(),
        }
    }

    /// Resolves a call into a request.
    ///
    /// # Errors
    ///
    /// Returns [`LurkError::NotAuthenticated`] when an authenticated call has
    /// no token, or a decode error if the payload cannot be serialized.
    pub fn build(&self, token: Option<&str>, call: &ApiCall) -> Result<HttpRequest> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        if call.requires_auth() {
            let token = token.ok_or(LurkError::NotAuthenticated)?;
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        Ok(HttpRequest {
            method: call.method(),
            url: format!("{}{}", self.base_url, self.path(call)),
            headers,
            body: call.body()?,
        })
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn login(&self, email: &str, password: &str) -> Result<HttpRequest> {
        self.build(None, &ApiCall::Login {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<HttpRequest> {
        self.build(None, &ApiCall::Register {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        })
    }

    /// `GET /job/feed?start=N` for a 1-indexed page.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn get_job_feed(&self, token: Option<&str>, page: u32) -> Result<HttpRequest> {
        self.build(token, &ApiCall::JobFeed { page })
    }

    /// `GET /user?userId=ID`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn get_user(&self, token: Option<&str>, user_id: UserId) -> Result<HttpRequest> {
        self.build(token, &ApiCall::User { user_id })
    }

    /// `PUT /job/like`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn like_job(&self, token: Option<&str>, id: JobId, turnon: bool) -> Result<HttpRequest> {
        self.build(token, &ApiCall::LikeJob { id, turnon })
    }

    /// `PUT /user`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn update_profile(&self, token: Option<&str>, update: ProfileUpdate) -> Result<HttpRequest> {
        self.build(token, &ApiCall::UpdateProfile(update))
    }

    /// `PUT /user/watch`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn watch_user(&self, token: Option<&str>, email: &str, turnon: bool) -> Result<HttpRequest> {
        self.build(token, &ApiCall::WatchUser {
            email: email.to_string(),
            turnon,
        })
    }

    /// `POST /job`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn add_job(&self, token: Option<&str>, job: NewJob) -> Result<HttpRequest> {
        self.build(token, &ApiCall::AddJob(job))
    }

    /// `PUT /job`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn update_job(&self, token: Option<&str>, update: JobUpdate) -> Result<HttpRequest> {
        self.build(token, &ApiCall::UpdateJob(update))
    }

    /// `DELETE /job`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn delete_job(&self, token: Option<&str>, id: JobId) -> Result<HttpRequest> {
        self.build(token, &ApiCall::DeleteJob { id })
    }

    /// `POST /job/comment`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::build`].
    pub fn add_comment(&self, token: Option<&str>, id: JobId, comment: &str) -> Result<HttpRequest> {
        self.build(token, &ApiCall::AddComment {
            id,
            comment: comment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5005/")
    }

    #[test]
    fn login_is_anonymous_post() {
        let req = client().login("a@b.c", "pw").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:5005/auth/login");
        assert!(!req.headers.contains_key("Authorization"));
        assert_eq!(req.json_body(), Some(json!({ "email": "a@b.c", "password": "pw" })));
    }

    #[test]
    fn feed_uses_zero_based_offset_and_no_body() {
        let req = client().get_job_feed(Some("tok"), 3).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:5005/job/feed?start=10");
        assert_eq!(req.headers.get("Authorization").map(String::as_str), Some("Bearer tok"));
        assert!(req.body.is_empty());

        let first = client().get_job_feed(Some("tok"), 1).unwrap();
        assert!(first.url.ends_with("start=0"));
    }

    #[test]
    fn authenticated_call_without_token_fails() {
        let err = client().get_user(None, 4).unwrap_err();
        assert!(matches!(err, LurkError::NotAuthenticated));
    }

    #[test]
    fn mutation_payloads() {
        let c = client();
        let like = c.like_job(Some("t"), 9, false).unwrap();
        assert_eq!(like.method, HttpMethod::Put);
        assert!(like.url.ends_with("/job/like"));
        assert_eq!(like.json_body(), Some(json!({ "id": 9, "turnon": false })));

        let delete = c.delete_job(Some("t"), 9).unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.json_body(), Some(json!({ "id": 9 })));

        let comment = c.add_comment(Some("t"), 9, "hi").unwrap();
        assert_eq!(comment.method, HttpMethod::Post);
        assert!(comment.url.ends_with("/job/comment"));
        assert_eq!(comment.json_body(), Some(json!({ "id": 9, "comment": "hi" })));
    }

    #[test]
    fn partial_updates_omit_absent_fields() {
        let update = ProfileUpdate {
            name: Some("New".into()),
            ..ProfileUpdate::default()
        };
        let req = client().build(Some("t"), &ApiCall::UpdateProfile(update)).unwrap();
        assert_eq!(req.json_body(), Some(json!({ "name": "New" })));

        let job = JobUpdate {
            id: 3,
            description: Some("d".into()),
            ..JobUpdate::default()
        };
        let req = client().build(Some("t"), &ApiCall::UpdateJob(job)).unwrap();
        assert_eq!(req.json_body(), Some(json!({ "id": 3, "description": "d" })));
    }
}
