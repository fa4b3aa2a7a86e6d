//! Domain layer containing the login flow's entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials, tokens and notifications
//! - [`repositories`] - Session store trait
//! - [`gateways`] - Authentication client and notifier traits
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod gateways;
pub mod repositories;
