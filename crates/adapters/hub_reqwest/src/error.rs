//! Hub-specific error type wrapping transport and decoding failures.

use minigate_domain::error::MinigateError;

/// Errors originating from the hub HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// The configured hub host does not form a valid HTTP URL.
    #[error("invalid hub URL")]
    BaseUrl(#[source] url::ParseError),

    /// The request could not be sent or the connection failed.
    #[error("hub unreachable")]
    Transport(#[source] reqwest::Error),

    /// The hub answered with a non-success status.
    #[error("hub responded with status {status}")]
    Status {
        /// The upstream status code.
        status: reqwest::StatusCode,
    },

    /// The hub's response body is not a JSON entity list.
    #[error("hub response is not valid JSON")]
    Decode(#[source] serde_json::Error),
}

impl From<HubError> for MinigateError {
    fn from(err: HubError) -> Self {
        Self::Upstream(Box::new(err))
    }
}
