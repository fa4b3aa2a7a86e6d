//! Web-specific middleware (session cookie, access check).

pub mod session;
pub mod web_auth;
