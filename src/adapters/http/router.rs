//! Router construction.

use crate::adapters::http::{AppState, links, session, workspace};
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Build the full axum router with all routes and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(session::health))
        .route("/api/auth/session", get(session::get_session))
        .route("/api/auth/user", get(session::get_user))
        .route(
            "/api/resolve/:entity_type/:entity_id",
            get(links::resolve_json),
        )
        // Short links
        .route("/c/:entity_id", get(links::channel_link))
        .route("/p/:entity_id", get(links::project_link))
        // Canonical workspace pages
        .route(
            "/:organization_id/:division_id/workspace",
            get(workspace::workspace_root),
        )
        .route(
            "/:organization_id/:division_id/workspace/*rest",
            get(workspace::workspace_page),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
