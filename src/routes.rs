//! Top-level router configuration combining page and health routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - Application root (session required)
//! - `GET  /login`   - Login form (public)
//! - `POST /login`   - Login submission (public)
//! - `GET  /health`  - Session store health (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session** - `sid` cookie issued to every visitor
//! - **Authentication** - Stored tokens required for protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::{session, web_auth};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
///
/// The session layer wraps every route, so the access check on protected
/// pages always sees a session id.
pub fn router(state: AppState) -> Router {
    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    Router::new()
        .merge(web_protected)
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(state.clone(), session::layer))
        .with_state(state)
        .layer(tracing::layer())
}
