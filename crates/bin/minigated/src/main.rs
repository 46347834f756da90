//! # minigated — minigate daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the hub client (outbound adapter)
//! - Construct application services, injecting the client via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use minigate_adapter_http_axum::router;
use minigate_adapter_http_axum::state::AppState;
use minigate_adapter_hub_reqwest::ReqwestHubClient;
use minigate_app::services::scene_service::SceneService;
use minigate_app::services::switch_service::SwitchService;
use minigate_domain::allow_list::AllowList;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Outbound hub client, shared by both services.
    let hub = ReqwestHubClient::new(&config.hub_config())?;

    // Services
    let allow_list = AllowList::default();
    let scene_service = SceneService::new(hub.clone(), allow_list.clone());
    let switch_service = SwitchService::new(hub, allow_list);

    // HTTP
    let state = AppState::new(scene_service, switch_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, hub = %config.hub.host, "minigated listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
