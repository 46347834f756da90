//! Scene service — use-cases for listing and activating scenes.

use minigate_domain::allow_list::AllowList;
use minigate_domain::error::{EntityKind, MinigateError, NotAllowedError};
use minigate_domain::scene::{Scene, SceneListing};

use crate::ports::HubClient;

/// Application service for the scene endpoints.
pub struct SceneService<H> {
    hub: H,
    allow_list: AllowList,
}

impl<H: HubClient> SceneService<H> {
    /// Create a new service backed by the given hub client.
    pub fn new(hub: H, allow_list: AllowList) -> Self {
        Self { hub, allow_list }
    }

    /// List the allow-listed scenes, in allow-list order.
    ///
    /// The hub's unfiltered payload rides along as `full_response`.
    ///
    /// # Errors
    ///
    /// Returns [`MinigateError::Upstream`] when the hub call fails.
    pub async fn list_scenes(&self) -> Result<SceneListing, MinigateError> {
        let entities = self.hub.list_states().await?;

        let mut allowed: Vec<(usize, Scene)> = entities
            .iter()
            .filter_map(|entity| {
                self.allow_list
                    .scene_position(&entity.entity_id)
                    .map(|position| (position, Scene::from(entity)))
            })
            .collect();
        allowed.sort_by_key(|(position, _)| *position);

        Ok(SceneListing {
            scenes: allowed.into_iter().map(|(_, scene)| scene).collect(),
            full_response: entities,
        })
    }

    /// Activate a scene and return its updated projection.
    ///
    /// The allow-list is checked first; a rejected id never reaches the hub.
    ///
    /// # Errors
    ///
    /// Returns [`MinigateError::NotAllowed`] for ids outside the allow-list,
    /// [`MinigateError::EmptyHubResponse`] when the hub reports no affected
    /// entities, or [`MinigateError::Upstream`] when the hub call fails.
    pub async fn activate_scene(&self, id: &str) -> Result<Scene, MinigateError> {
        if !self.allow_list.allows_scene(id) {
            tracing::debug!(scene = %id, "rejected scene outside the allow-list");
            return Err(NotAllowedError {
                kind: EntityKind::Scene,
                id: id.to_string(),
            }
            .into());
        }

        let affected = self.hub.activate_scene(id).await?;
        let entity = affected.first().ok_or(MinigateError::EmptyHubResponse)?;
        Ok(Scene::from(entity))
    }
}
