//! HTTP inbound adapter (axum). Routes, handlers and HTML views.

pub mod credentials;
pub mod links;
pub mod navigation;
pub mod router;
pub mod session;
pub mod views;
pub mod workspace;

pub use navigation::RedirectNavigator;
pub use router::build_router;

use crate::ports::EntityResolver;
use crate::usecases::{CurrentUserService, SessionService};
use axum::http::HeaderName;
use axum::http::header::{CACHE_CONTROL, PRAGMA};
use std::sync::Arc;
use std::time::Duration;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService>,
    pub users: Arc<CurrentUserService>,
    pub resolver: Arc<dyn EntityResolver>,
    pub resolve_timeout: Duration,
}

/// Headers that keep identity-bearing and per-user responses out of shared caches.
pub fn no_store() -> [(HeaderName, &'static str); 2] {
    [
        (CACHE_CONTROL, "no-store, must-revalidate"),
        (PRAGMA, "no-cache"),
    ]
}
