//! Backend API client.
//!
//! The client is split the way the plugin runtime forces it to be: requests
//! are built here, issued by the host, and their responses come back later as
//! events tagged with the [`RequestTag`] they were sent with.
//!
//! - [`request`]: typed operations and request construction
//! - [`response`]: status/body normalization into `Ok`/`Err`
//! - [`tag`]: request identity echoed through the host context map

pub mod request;
pub mod response;
pub mod tag;

pub use request::{ApiCall, ApiClient, HttpMethod, HttpRequest, JobUpdate, NewJob, ProfileUpdate, PAGE_SIZE};
pub use response::{decode, Ack, ApiOutcome, AuthResponse, JobCreated};
pub use tag::{Mutation, RequestTag, TAG_CONTEXT_KEY};

/// A request paired with the tag its response will carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub tag: RequestTag,
    pub http: HttpRequest,
}
