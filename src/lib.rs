//! # Login Portal
//!
//! A server-rendered login form built with Axum and Askama. Credentials are
//! validated before submission, exchanged for an access/refresh token pair at
//! an upstream authentication API, and stored in a session keyed by the
//! visitor's `sid` cookie.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Credentials, tokens, and the collaborator traits
//! - **Application Layer** ([`application`]) - The login flow and its in-flight guard
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP auth client, session stores, flash notifications
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//! - **Web Layer** ([`web`]) - Login page, application root, session cookie
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_API_URL="https://api.example.com/auth/login"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginOutcome, LoginService};
    pub use crate::domain::entities::{AuthTokens, Credentials, FieldErrors, Notification};
    pub use crate::domain::gateways::{AuthClient, AuthFailure, Notifier};
    pub use crate::domain::repositories::SessionRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
