//! Short-link routes: `/c/{id}`, `/p/{id}` and the JSON `/api/resolve/{type}/{id}`.
//!
//! Each request mounts its own splash, so there is exactly one resolution per request.

use crate::adapters::http::{AppState, RedirectNavigator, credentials, no_store, views};
use crate::domain::{EntityReference, EntityType, ResolutionState};
use crate::usecases::ResolvingSplash;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// HTTP status for a settled splash.
pub fn status_for(state: &ResolutionState) -> StatusCode {
    match state {
        ResolutionState::Redirecting { .. } => StatusCode::SEE_OTHER,
        ResolutionState::NotFound => StatusCode::NOT_FOUND,
        ResolutionState::Forbidden => StatusCode::FORBIDDEN,
        ResolutionState::Error { .. } => StatusCode::BAD_GATEWAY,
        ResolutionState::Idle | ResolutionState::Resolving => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Run one splash for `reference`. Returns its final state and the navigation target, if any.
async fn resolve_reference(
    state: &AppState,
    reference: EntityReference,
    headers: &HeaderMap,
) -> (ResolutionState, Option<String>) {
    let creds = credentials::from_headers(headers);
    let navigator = Arc::new(RedirectNavigator::new());
    let splash = ResolvingSplash::new(
        Arc::clone(&state.resolver),
        navigator.clone(),
        state.resolve_timeout,
    );
    let outcome = splash.run(reference, creds.access_token.as_deref()).await;
    (outcome, navigator.last())
}

async fn short_link(state: AppState, reference: EntityReference, headers: HeaderMap) -> Response {
    let (outcome, target) = resolve_reference(&state, reference.clone(), &headers).await;

    if let (ResolutionState::Redirecting { .. }, Some(target)) = (&outcome, target) {
        match HeaderValue::from_str(&target) {
            Ok(location) => {
                return (
                    StatusCode::SEE_OTHER,
                    [(LOCATION, location)],
                    no_store(),
                    Html(views::splash_page(&reference, &outcome)),
                )
                    .into_response();
            }
            Err(_) => {
                warn!(entity = %reference, "resolved path is not a valid Location header");
                let failed = ResolutionState::Error {
                    message: "invalid redirect target".into(),
                };
                return (
                    status_for(&failed),
                    no_store(),
                    Html(views::splash_page(&reference, &failed)),
                )
                    .into_response();
            }
        }
    }

    (
        status_for(&outcome),
        no_store(),
        Html(views::splash_page(&reference, &outcome)),
    )
        .into_response()
}

/// `GET /c/{channelId}`
pub async fn channel_link(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    short_link(state, EntityReference::channel(entity_id), headers).await
}

/// `GET /p/{projectId}`
pub async fn project_link(
    State(state): State<AppState>,
    Path(entity_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    short_link(state, EntityReference::project(entity_id), headers).await
}

/// `GET /api/resolve/{type}/{id}`
pub async fn resolve_json(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let entity_type: EntityType = match entity_type.parse() {
        Ok(t) => t,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, no_store(), Json(json!({ "error": e })))
                .into_response();
        }
    };

    let reference = EntityReference::new(entity_type, entity_id);
    let (outcome, _) = resolve_reference(&state, reference, &headers).await;

    match outcome {
        ResolutionState::Redirecting { location } => {
            (StatusCode::OK, no_store(), Json(json!({ "location": location }))).into_response()
        }
        other => {
            let error = match &other {
                ResolutionState::NotFound => "not found",
                ResolutionState::Forbidden => "access denied",
                _ => "resolution failed",
            };
            (
                status_for(&other),
                no_store(),
                Json(json!({ "state": other.name(), "error": error })),
            )
                .into_response()
        }
    }
}
