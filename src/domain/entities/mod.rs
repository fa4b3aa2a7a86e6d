//! Core domain entities of the login flow.
//!
//! Entities are plain data structures; behavior lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`Credentials`] - Username/password pair and its validation schema
//! - [`FieldErrors`] - Inline validation messages per form field
//! - [`LoginResponse`] / [`TokenPair`] - Wire shape of a successful login
//! - [`AuthTokens`] - Tokens owned by the session store
//! - [`Notification`] - One-shot success/error message
//!
//! Session ids are generated and checked by [`session_id`].

pub mod credentials;
pub mod notification;
pub mod session_id;
pub mod tokens;

pub use credentials::{Credentials, FieldErrors, PASSWORD_TOO_SHORT, USERNAME_REQUIRED};
pub use notification::{Notification, NotificationLevel};
pub use session_id::{generate_session_id, is_valid_session_id};
pub use tokens::{AuthTokens, LoginResponse, TokenPair};
