//! Switch service — use-cases for listing and controlling switches.

use minigate_domain::allow_list::AllowList;
use minigate_domain::error::{EntityKind, MinigateError, NotAllowedError};
use minigate_domain::switch::{Switch, SwitchCommand, SwitchListing};

use crate::ports::HubClient;

/// Application service for the switch endpoints.
pub struct SwitchService<H> {
    hub: H,
    allow_list: AllowList,
}

impl<H: HubClient> SwitchService<H> {
    /// Create a new service backed by the given hub client.
    pub fn new(hub: H, allow_list: AllowList) -> Self {
        Self { hub, allow_list }
    }

    /// List the allow-listed switches, in allow-list order.
    ///
    /// The hub's unfiltered payload rides along as `full_response`.
    ///
    /// # Errors
    ///
    /// Returns [`MinigateError::Upstream`] when the hub call fails.
    pub async fn list_switches(&self) -> Result<SwitchListing, MinigateError> {
        let entities = self.hub.list_states().await?;

        let mut allowed: Vec<(usize, Switch)> = entities
            .iter()
            .filter_map(|entity| {
                self.allow_list
                    .switch_position(&entity.entity_id)
                    .map(|position| (position, Switch::from(entity)))
            })
            .collect();
        allowed.sort_by_key(|(position, _)| *position);

        Ok(SwitchListing {
            switches: allowed.into_iter().map(|(_, switch)| switch).collect(),
            full_response: entities,
        })
    }

    /// Set a switch to the given command and return its updated projection.
    ///
    /// The allow-list is checked first; a rejected id never reaches the hub.
    ///
    /// # Errors
    ///
    /// Returns [`MinigateError::NotAllowed`] for ids outside the allow-list,
    /// [`MinigateError::EmptyHubResponse`] when the hub reports no affected
    /// entities, or [`MinigateError::Upstream`] when the hub call fails.
    pub async fn set_switch(
        &self,
        id: &str,
        command: SwitchCommand,
    ) -> Result<Switch, MinigateError> {
        if !self.allow_list.allows_switch(id) {
            tracing::debug!(switch = %id, "rejected switch outside the allow-list");
            return Err(NotAllowedError {
                kind: EntityKind::Switch,
                id: id.to_string(),
            }
            .into());
        }

        let affected = self.hub.set_switch(id, command).await?;
        let entity = affected.first().ok_or(MinigateError::EmptyHubResponse)?;
        Ok(Switch::from(entity))
    }
}
