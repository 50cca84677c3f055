//! Auth endpoints. Always 200: failures are reported as a null payload.

use crate::adapters::http::{AppState, credentials, no_store};
use crate::domain::{Session, WorkspaceUser};
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: Option<WorkspaceUser>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub auth_configured: bool,
}

/// `GET /api/auth/session`
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let creds = credentials::from_headers(&headers);
    let session = state.sessions.current_session(&creds).await;
    (no_store(), Json(SessionResponse { session })).into_response()
}

/// `GET /api/auth/user`
pub async fn get_user(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let creds = credentials::from_headers(&headers);
    let user = state.users.current_user(&creds).await;
    (no_store(), Json(UserResponse { user })).into_response()
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        auth_configured: state.sessions.is_auth_configured(),
    })
}
