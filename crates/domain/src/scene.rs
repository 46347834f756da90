//! Scene projection — the gateway-facing shape of a hub scene entity.

use serde::{Deserialize, Serialize};

use crate::entity::HubEntity;

/// A scene as exposed by the gateway.
///
/// For scene entities the hub stores the most recent activation timestamp in
/// the `state` field, which is why it surfaces here as `lastActivated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub friendly_name: String,
    pub last_activated: String,
}

impl From<&HubEntity> for Scene {
    fn from(entity: &HubEntity) -> Self {
        Self {
            id: entity.entity_id.clone(),
            friendly_name: entity.attributes.friendly_name.clone(),
            last_activated: entity.state.clone(),
        }
    }
}

/// Payload of the scene list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneListing {
    /// Allow-listed scenes, in allow-list order.
    pub scenes: Vec<Scene>,
    /// The hub's unfiltered `/api/states` payload, echoed verbatim as a
    /// debugging aid.
    // TODO: ask the dashboard maintainers whether fullResponse is still
    // consumed before dropping it from the contract.
    pub full_response: Vec<HubEntity>,
}
