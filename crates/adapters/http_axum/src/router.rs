//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use minigate_app::ports::HubClient;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api`. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<H>(state: AppState<H>) -> Router
where
    H: HubClient + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use minigate_app::services::scene_service::SceneService;
    use minigate_app::services::switch_service::SwitchService;
    use minigate_domain::allow_list::AllowList;
    use minigate_domain::entity::{EntityAttributes, HubEntity};
    use minigate_domain::error::MinigateError;
    use minigate_domain::switch::SwitchCommand;

    #[derive(Default)]
    struct StubHub {
        states: Vec<HubEntity>,
        service_response: Vec<HubEntity>,
        calls: Mutex<Vec<String>>,
    }

    impl HubClient for StubHub {
        fn list_states(
            &self,
        ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
            let result = self.states.clone();
            async { Ok(result) }
        }

        fn activate_scene(
            &self,
            entity_id: &str,
        ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
            self.calls
                .lock()
                .unwrap()
                .push(format!("scene/turn_on {entity_id}"));
            let result = self.service_response.clone();
            async { Ok(result) }
        }

        fn set_switch(
            &self,
            entity_id: &str,
            command: SwitchCommand,
        ) -> impl Future<Output = Result<Vec<HubEntity>, MinigateError>> + Send {
            self.calls
                .lock()
                .unwrap()
                .push(format!("switch/{} {entity_id}", command.service()));
            let result = self.service_response.clone();
            async { Ok(result) }
        }
    }

    fn entity(id: &str, state: &str, name: &str) -> HubEntity {
        HubEntity {
            entity_id: id.to_string(),
            state: state.to_string(),
            attributes: EntityAttributes {
                friendly_name: name.to_string(),
                extra: serde_json::Map::new(),
            },
            extra: serde_json::Map::new(),
        }
    }

    fn app(hub: Arc<StubHub>) -> Router {
        let state = AppState::new(
            SceneService::new(Arc::clone(&hub), AllowList::default()),
            SwitchService::new(hub, AllowList::default()),
        );
        build(state)
    }

    async fn body_string(response: axum::response::Response) -> String {
        String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app(Arc::new(StubHub::default()))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_allow_listed_scenes_with_full_response() {
        let hub = Arc::new(StubHub {
            states: vec![
                entity("scene.avond", "2025-10-19T21:31:10+00:00", "Avond"),
                entity("light.keuken", "on", "Keuken"),
            ],
            ..StubHub::default()
        });

        let response = app(hub)
            .oneshot(
                Request::builder()
                    .uri("/api/scenes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["scenes"].as_array().unwrap().len(), 1);
        assert_eq!(body["scenes"][0]["id"], "scene.avond");
        assert_eq!(body["scenes"][0]["friendlyName"], "Avond");
        assert_eq!(body["scenes"][0]["lastActivated"], "2025-10-19T21:31:10+00:00");
        assert_eq!(body["fullResponse"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_start_allowed_scene() {
        let hub = Arc::new(StubHub {
            service_response: vec![entity("scene.ochtend", "t", "Ochtend")],
            ..StubHub::default()
        });

        let response = app(Arc::clone(&hub))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/start_scene/scene.ochtend")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], "scene.ochtend");
        assert_eq!(
            *hub.calls.lock().unwrap(),
            ["scene/turn_on scene.ochtend"]
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_scene_outside_the_allow_list() {
        let hub = Arc::new(StubHub::default());

        let response = app(Arc::clone(&hub))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/start_scene/scene.feest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Scene not found");
        assert!(hub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_allow_listed_switches_with_full_response() {
        let hub = Arc::new(StubHub {
            states: vec![
                entity("switch.tv_meubel", "on", "TV meubel"),
                entity("scene.avond", "t", "Avond"),
            ],
            ..StubHub::default()
        });

        let response = app(hub)
            .oneshot(
                Request::builder()
                    .uri("/api/switches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["switches"].as_array().unwrap().len(), 1);
        assert_eq!(body["switches"][0]["id"], "switch.tv_meubel");
        assert_eq!(body["switches"][0]["state"], "on");
        assert_eq!(body["fullResponse"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_map_on_segment_to_the_turn_on_service() {
        let hub = Arc::new(StubHub {
            service_response: vec![entity("switch.tv_meubel", "on", "TV meubel")],
            ..StubHub::default()
        });

        let response = app(Arc::clone(&hub))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/set_switch/switch.tv_meubel/on")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *hub.calls.lock().unwrap(),
            ["switch/turn_on switch.tv_meubel"]
        );
    }

    #[tokio::test]
    async fn should_map_any_other_segment_to_the_turn_off_service() {
        let hub = Arc::new(StubHub {
            service_response: vec![entity("switch.tv_meubel", "off", "TV meubel")],
            ..StubHub::default()
        });

        let response = app(Arc::clone(&hub))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/set_switch/switch.tv_meubel/dimmed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *hub.calls.lock().unwrap(),
            ["switch/turn_off switch.tv_meubel"]
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_switch_outside_the_allow_list() {
        let hub = Arc::new(StubHub::default());

        let response = app(Arc::clone(&hub))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/set_switch/switch.onbekend/on")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Switch not found");
        assert!(hub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_bad_gateway_when_hub_reports_no_affected_entities() {
        let hub = Arc::new(StubHub::default());

        let response = app(hub)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/start_scene/scene.avond")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
