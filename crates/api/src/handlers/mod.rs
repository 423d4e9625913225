//! Request handlers, one module per resource.

pub mod auth;
pub mod cliente;
pub mod dashboard;
pub mod documento;
pub mod obra;
