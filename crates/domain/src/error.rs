//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MinigateError`]; adapters box their concrete error as the
//! [`MinigateError::Upstream`] source.

use std::fmt;

/// Which allow-list rejected an entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Scene,
    Switch,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene => f.write_str("scene"),
            Self::Switch => f.write_str("switch"),
        }
    }
}

/// An entity id outside the configured allow-list.
#[derive(Debug, thiserror::Error)]
#[error("{kind} '{id}' is not in the allow-list")]
pub struct NotAllowedError {
    /// Which list rejected the id.
    pub kind: EntityKind,
    /// The rejected id, kept for logging.
    pub id: String,
}

/// Top-level error taxonomy for the gateway.
#[derive(Debug, thiserror::Error)]
pub enum MinigateError {
    /// Requested id is outside the allow-list.
    #[error(transparent)]
    NotAllowed(#[from] NotAllowedError),

    /// The hub answered with an empty entity list where one element was
    /// required.
    #[error("hub reported no affected entities")]
    EmptyHubResponse,

    /// Transport failure, upstream error status, or undecodable hub payload.
    #[error("hub request failed")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}
