//! Domain layer for the obras backend.
//!
//! Dependency-light: error taxonomy, shared ID/timestamp aliases, the
//! obra status enum, and the pure progress-percentage rules. Everything
//! here is usable from both the persistence and HTTP layers without
//! pulling in sqlx or axum.

pub mod avance;
pub mod error;
pub mod estado;
pub mod roles;
pub mod types;
