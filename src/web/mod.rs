//! Web layer for the browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`dto`] - Form payloads
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session cookie and access check
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
