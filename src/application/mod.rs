//! Application layer services implementing the login flow.
//!
//! Services consume the domain contracts (auth client, session store,
//! notifier) and expose an API the web handlers and the CLI share.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Login form controller

pub mod services;
