//! Contracts for the collaborators the login flow talks to.
//!
//! - [`AuthClient`] - Exchanges credentials for tokens
//! - [`Notifier`] - Delivers success/error notifications

pub mod auth_client;
pub mod notifier;

pub use auth_client::{AuthClient, AuthFailure, ErrorData, GENERIC_ERROR_MESSAGE};
pub use notifier::Notifier;

#[cfg(test)]
pub use auth_client::MockAuthClient;
#[cfg(test)]
pub use notifier::MockNotifier;
