//! `blogapi-core` — domain entities shared across the service.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod entity;

pub use entity::{Blog, User};
