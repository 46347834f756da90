//! JSON REST handlers for switches.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use minigate_app::ports::HubClient;
use minigate_domain::switch::{Switch, SwitchCommand, SwitchListing};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<SwitchListing>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok(Json<Switch>),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/switches`
pub async fn list<H>(State(state): State<AppState<H>>) -> Result<ListResponse, ApiError>
where
    H: HubClient + Send + Sync + 'static,
{
    let listing = state.switch_service.list_switches().await?;
    Ok(ListResponse::Ok(Json(listing)))
}

/// `POST /api/set_switch/:switch_id/:switch_state`
///
/// The state segment maps to a hub service via
/// [`SwitchCommand::from_state`]; anything but `"on"` turns the switch off.
pub async fn set_state<H>(
    State(state): State<AppState<H>>,
    Path((switch_id, switch_state)): Path<(String, String)>,
) -> Result<SetResponse, ApiError>
where
    H: HubClient + Send + Sync + 'static,
{
    let command = SwitchCommand::from_state(&switch_state);
    let switch = state.switch_service.set_switch(&switch_id, command).await?;
    Ok(SetResponse::Ok(Json(switch)))
}
