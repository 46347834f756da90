//! Reqwest-backed implementation of the [`HubClient`] port.

use std::time::Duration;

use reqwest::Url;
use serde_json::json;

use minigate_app::ports::HubClient;
use minigate_domain::entity::HubEntity;
use minigate_domain::error::MinigateError;
use minigate_domain::switch::SwitchCommand;

use crate::error::HubError;

/// Connection settings for the hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// `host:port` of the hub's REST API, without a scheme.
    pub host: String,
    /// Bearer token sent on every call.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// [`HubClient`] implementation speaking the hub's REST API over HTTP.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ReqwestHubClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl ReqwestHubClient {
    /// Build a client from the given settings.
    ///
    /// The base URL is parsed once here; per-call URLs are composed by
    /// joining path segments onto it.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::BaseUrl`] when `host` does not form a valid HTTP
    /// URL, or [`HubError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &HubConfig) -> Result<Self, HubError> {
        let base_url =
            Url::parse(&format!("http://{}/", config.host)).map_err(HubError::BaseUrl)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(HubError::Transport)?;
        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, HubError> {
        self.base_url.join(path).map_err(HubError::BaseUrl)
    }

    async fn fetch_entities(&self, path: &str) -> Result<Vec<HubEntity>, MinigateError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(HubError::Transport)?;
        Self::decode(response).await
    }

    async fn call_service(
        &self,
        path: &str,
        entity_id: &str,
    ) -> Result<Vec<HubEntity>, MinigateError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&json!({ "entity_id": entity_id }))
            .send()
            .await
            .map_err(HubError::Transport)?;
        Self::decode(response).await
    }

    /// Check the status and decode the body. The body is read as text first
    /// so a non-JSON payload can be logged before the error propagates.
    async fn decode(response: reqwest::Response) -> Result<Vec<HubEntity>, MinigateError> {
        let status = response.status();
        if !status.is_success() {
            return Err(HubError::Status { status }.into());
        }

        let body = response.text().await.map_err(HubError::Transport)?;
        match serde_json::from_str(&body) {
            Ok(entities) => Ok(entities),
            Err(err) => {
                tracing::warn!(error = %err, body = %body, "hub response is not a JSON entity list");
                Err(HubError::Decode(err).into())
            }
        }
    }
}

impl HubClient for ReqwestHubClient {
    async fn list_states(&self) -> Result<Vec<HubEntity>, MinigateError> {
        self.fetch_entities("api/states").await
    }

    async fn activate_scene(&self, entity_id: &str) -> Result<Vec<HubEntity>, MinigateError> {
        self.call_service("api/services/scene/turn_on", entity_id)
            .await
    }

    async fn set_switch(
        &self,
        entity_id: &str,
        command: SwitchCommand,
    ) -> Result<Vec<HubEntity>, MinigateError> {
        let path = format!("api/services/switch/{}", command.service());
        self.call_service(&path, entity_id).await
    }
}
