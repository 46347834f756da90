//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod scenes;
#[allow(clippy::missing_errors_doc)]
pub mod switches;

use axum::Router;
use axum::routing::{get, post};

use minigate_app::ports::HubClient;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<H>() -> Router<AppState<H>>
where
    H: HubClient + Send + Sync + 'static,
{
    Router::new()
        // Scenes
        .route("/scenes", get(scenes::list::<H>))
        .route("/start_scene/{scene_name}", post(scenes::start::<H>))
        // Switches
        .route("/switches", get(switches::list::<H>))
        .route(
            "/set_switch/{switch_id}/{switch_state}",
            post(switches::set_state::<H>),
        )
}
