//! Form payloads accepted by the web pages.

pub mod login;

pub use login::LoginFormPayload;
