//! Current-session lookup with degrade-to-anonymous semantics.
//!
//! Every failure collapses to `None`. An unconfigured provider is logged at debug,
//! a real failure at error, so the two stay distinguishable in logs.

use crate::domain::{RequestCredentials, Session};
use crate::ports::AuthGatewayProvider;
use std::sync::Arc;
use tracing::{debug, error};

pub struct SessionService {
    provider: Arc<dyn AuthGatewayProvider>,
}

impl SessionService {
    pub fn new(provider: Arc<dyn AuthGatewayProvider>) -> Self {
        Self { provider }
    }

    pub fn is_auth_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Session for the request's credentials, or `None`. Never fails.
    pub async fn current_session(&self, credentials: &RequestCredentials) -> Option<Session> {
        let gateway = match self.provider.gateway(credentials) {
            Ok(g) => g,
            Err(e) => {
                debug!(reason = %e, "auth gateway unavailable; anonymous session");
                return None;
            }
        };

        match gateway.get_session().await {
            Ok(session) => session,
            Err(e) if e.is_auth_unavailable() => {
                debug!(reason = %e, "auth gateway unavailable; anonymous session");
                None
            }
            Err(e) => {
                error!(error = %e, "session lookup failed; anonymous session");
                None
            }
        }
    }
}
