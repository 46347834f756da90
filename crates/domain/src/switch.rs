//! Switch projection and the hub service mapping for switch commands.

use serde::{Deserialize, Serialize};

use crate::entity::HubEntity;

/// A switch as exposed by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Switch {
    pub id: String,
    pub friendly_name: String,
    pub state: String,
}

impl From<&HubEntity> for Switch {
    fn from(entity: &HubEntity) -> Self {
        Self {
            id: entity.entity_id.clone(),
            friendly_name: entity.attributes.friendly_name.clone(),
            state: entity.state.clone(),
        }
    }
}

/// Payload of the switch list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchListing {
    /// Allow-listed switches, in allow-list order.
    pub switches: Vec<Switch>,
    /// The hub's unfiltered `/api/states` payload, echoed verbatim as a
    /// debugging aid.
    pub full_response: Vec<HubEntity>,
}

/// Hub service invoked when setting a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    TurnOn,
    TurnOff,
}

impl SwitchCommand {
    /// Map a caller-supplied state string; anything but `"on"` turns off.
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        if state == "on" {
            Self::TurnOn
        } else {
            Self::TurnOff
        }
    }

    /// The hub service name, used as the final URL segment
    /// (`/api/services/switch/<service>`).
    #[must_use]
    pub fn service(self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }
}
