//! HTTP layer for the obras backend.
//!
//! Exposed as a library so integration tests can build the same router
//! and middleware stack the binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
