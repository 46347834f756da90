//! Application services — use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod scene_service;
pub mod switch_service;
