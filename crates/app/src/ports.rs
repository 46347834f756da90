//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The gateway has a single driven port: the hub's REST API.

use std::future::Future;

use minigate_domain::entity::HubEntity;
use minigate_domain::error::MinigateError;
use minigate_domain::switch::SwitchCommand;

/// Outbound port to the home-automation hub's REST API.
///
/// One method per upstream operation the gateway performs. Implementations
/// authenticate every call and surface failures as
/// [`MinigateError::Upstream`].
pub trait HubClient {
    /// Fetch the full entity state list (`GET /api/states`).
    fn list_states(&self) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send;

    /// Activate a scene (`POST /api/services/scene/turn_on`).
    ///
    /// The hub responds with the list of entities the call affected.
    fn activate_scene(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send;

    /// Turn a switch on or off (`POST /api/services/switch/{command}`).
    ///
    /// The hub responds with the list of entities the call affected.
    fn set_switch(
        &self,
        entity_id: &str,
        command: SwitchCommand,
    ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send;
}

impl<T: HubClient + Send + Sync> HubClient for std::sync::Arc<T> {
    fn list_states(&self) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
        (**self).list_states()
    }

    fn activate_scene(
        &self,
        entity_id: &str,
    ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
        (**self).activate_scene(entity_id)
    }

    fn set_switch(
        &self,
        entity_id: &str,
        command: SwitchCommand,
    ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
        (**self).set_switch(entity_id, command)
    }
}
