//! Hub entity — the state object reported by the hub's `/api/states`.

use serde::{Deserialize, Serialize};

/// Attributes of a hub entity.
///
/// Only `friendly_name` is interpreted by the gateway. The hub sends many
/// more fields (`last_triggered`, `mode`, `icon`, …); they are kept in
/// `extra` so an entity can be re-serialized without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// Human-readable name. Empty when the hub omits it.
    #[serde(default)]
    pub friendly_name: String,
    /// Every other attribute field, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single entity state as reported by the hub.
///
/// `entity_id` is namespaced with a dot-separated domain prefix
/// (`scene.avond`, `switch.tv_meubel`, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubEntity {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: EntityAttributes,
    /// Fields the gateway does not interpret (`last_changed`, `context`, …),
    /// passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
