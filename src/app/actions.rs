//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host directly. It returns a
//! `Vec<Action>` which the plugin shim executes in order: issuing web
//! requests, renaming the pane, or hiding the plugin.

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues an HTTP request; its response returns as
    /// [`crate::app::Event::ApiResponse`] carrying the same tag.
    Request(ApiRequest),

    /// Renames the plugin pane, the terminal analogue of the document title.
    SetTitle(String),

    /// Hides the plugin pane.
    CloseFocus,
}

impl Action {
    /// The request carried by this action, if any.
    #[must_use]
    pub const fn as_request(&self) -> Option<&ApiRequest> {
        match self {
            Self::Request(req) => Some(req),
            _ => None,
        }
    }
}
