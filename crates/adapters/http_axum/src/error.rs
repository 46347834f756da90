//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use minigate_domain::error::{EntityKind, MinigateError};

/// JSON error body returned for upstream failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MinigateError`] to an HTTP response with appropriate status code.
pub struct ApiError(MinigateError);

impl From<MinigateError> for ApiError {
    fn from(err: MinigateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            MinigateError::NotAllowed(err) => {
                // The plain-text bodies are part of the public contract.
                let body = match err.kind {
                    EntityKind::Scene => "Scene not found",
                    EntityKind::Switch => "Switch not found",
                };
                (StatusCode::NOT_FOUND, body).into_response()
            }
            MinigateError::EmptyHubResponse => {
                tracing::error!("hub reported no affected entities");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorBody {
                        error: "empty hub response".to_string(),
                    }),
                )
                    .into_response()
            }
            MinigateError::Upstream(err) => {
                tracing::error!(error = %err, "hub request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorBody {
                        error: "hub request failed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
