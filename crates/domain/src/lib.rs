//! # minigate-domain
//!
//! Pure domain model for the minigate hub gateway.
//!
//! ## Responsibilities
//! - Define **`HubEntity`** — the state object the hub reports, kept
//!   re-serializable without loss so list endpoints can echo it verbatim
//! - Define the gateway **projections** (`Scene`, `Switch`) and the list
//!   payloads built from them
//! - Define the **`AllowList`** of entity ids the gateway may expose
//! - Define **`SwitchCommand`** — the `turn_on`/`turn_off` service mapping
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod allow_list;
pub mod entity;
pub mod error;
pub mod scene;
pub mod switch;
