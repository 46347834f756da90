//! # minigate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`HubClient` port** the outbound adapter implements
//! - Provide the gateway use-cases:
//!   - `SceneService` — list allow-listed scenes, activate a scene
//!   - `SwitchService` — list allow-listed switches, set a switch state
//! - Enforce the allow-list **before** any upstream call is made
//!
//! ## Dependency rule
//! Depends on `minigate-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
