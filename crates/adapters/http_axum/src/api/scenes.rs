//! JSON REST handlers for scenes.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use minigate_app::ports::HubClient;
use minigate_domain::scene::{Scene, SceneListing};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<SceneListing>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the start endpoint.
pub enum StartResponse {
    Ok(Json<Scene>),
}

impl IntoResponse for StartResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/scenes`
pub async fn list<H>(State(state): State<AppState<H>>) -> Result<ListResponse, ApiError>
where
    H: HubClient + Send + Sync + 'static,
{
    let listing = state.scene_service.list_scenes().await?;
    Ok(ListResponse::Ok(Json(listing)))
}

/// `POST /api/start_scene/:scene_name`
pub async fn start<H>(
    State(state): State<AppState<H>>,
    Path(scene_name): Path<String>,
) -> Result<StartResponse, ApiError>
where
    H: HubClient + Send + Sync + 'static,
{
    let scene = state.scene_service.activate_scene(&scene_name).await?;
    Ok(StartResponse::Ok(Json(scene)))
}
