//! JSON endpoints and cross-cutting HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Endpoint handlers (health check)
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
