//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`auth`] - HTTP client for the upstream authentication API
//! - [`notifications`] - Flash-message notifier
//! - [`session`] - Session stores (Redis and in-memory)

pub mod auth;
pub mod notifications;
pub mod session;
