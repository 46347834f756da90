//! # minigate-adapter-hub-reqwest
//!
//! Outbound hub adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`HubClient`](minigate_app::ports::HubClient) port
//! - Compose upstream URLs from a validated base URL plus fixed path segments
//! - Authenticate every call with the configured bearer token
//! - Bound every call with a request timeout
//! - Decode hub payloads, logging the raw body when decoding fails
//!
//! ## Dependency rule
//! Depends on `minigate-app` (for the port trait) and `minigate-domain`
//! (for wire types). The `app` and `domain` crates must never reference
//! this adapter.

mod client;
mod error;

pub use client::{HubConfig, ReqwestHubClient};
pub use error::HubError;
