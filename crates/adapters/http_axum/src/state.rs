//! Shared application state for axum handlers.

use std::sync::Arc;

use minigate_app::ports::HubClient;
use minigate_app::services::scene_service::SceneService;
use minigate_app::services::switch_service::SwitchService;

/// Application state shared across all axum handlers.
///
/// Generic over the hub client type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the client itself does not need to be `Clone` —
/// only the `Arc` wrappers are cloned.
pub struct AppState<H> {
    /// Scene listing/activation service.
    pub scene_service: Arc<SceneService<H>>,
    /// Switch listing/control service.
    pub switch_service: Arc<SwitchService<H>>,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            scene_service: Arc::clone(&self.scene_service),
            switch_service: Arc::clone(&self.switch_service),
        }
    }
}

impl<H> AppState<H>
where
    H: HubClient + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(scene_service: SceneService<H>, switch_service: SwitchService<H>) -> Self {
        Self {
            scene_service: Arc::new(scene_service),
            switch_service: Arc::new(switch_service),
        }
    }
}
