//! Request identity carried through the host.
//!
//! Zellij echoes the `context` map of a `web_request` back with its result.
//! The client stores a serialized [`RequestTag`] there so that each response
//! can be routed to the region that asked for it, together with the
//! generation it was issued under.

use crate::domain::models::{JobId, UserId};
use crate::domain::session::ScreenId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context key under which the tag travels.
pub const TAG_CONTEXT_KEY: &str = "lurkforwork_request";

/// Mutations whose success refreshes the screen that sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    Like { job_id: JobId, turnon: bool },
    /// `user_id` is set when toggled from a profile, `None` for watch-by-email.
    Watch { user_id: Option<UserId>, turnon: bool },
    DeleteJob { job_id: JobId },
    UpdateJob { job_id: JobId },
    AddJob,
    UpdateProfile,
    Comment { job_id: JobId },
}

/// Identifies what an in-flight request belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestTag {
    Login,
    Register,
    Feed { generation: u64, page: u32 },
    Creator { generation: u64, user_id: UserId },
    Profile { generation: u64, user_id: UserId },
    Watchee { generation: u64, user_id: UserId },
    /// `origin` is the screen the mutation was sent from.
    Mutation { mutation: Mutation, origin: ScreenId },
}

impl RequestTag {
    /// Builds the `web_request` context map for this tag.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match serde_json::to_string(self) {
            Ok(encoded) => {
                context.insert(TAG_CONTEXT_KEY.to_string(), encoded);
            }
            Err(e) => tracing::debug!(error = %e, "failed to serialize request tag"),
        }
        context
    }

    /// Recovers a tag from a `WebRequestResult` context map.
    ///
    /// Returns `None` for responses that were not issued by this client.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let raw = context.get(TAG_CONTEXT_KEY)?;
        serde_json::from_str(raw)
            .map_err(|e| tracing::debug!(error = %e, "failed to decode request tag"))
            .ok()
    }
}
