//! Static auth provider for testing without an identity provider.
//!
//! Returns a preset outcome for every request and counts gateway calls.

use crate::domain::{DomainError, RequestCredentials, Session};
use crate::ports::{AuthGatewayProvider, SessionGateway};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
enum Outcome {
    Unavailable,
    Session(Option<Session>),
    Failure(DomainError),
}

pub struct StaticAuthProvider {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl StaticAuthProvider {
    /// Provider that is never configured.
    pub fn unavailable() -> Self {
        Self::with(Outcome::Unavailable)
    }

    /// Every gateway returns `session`.
    pub fn with_session(session: Option<Session>) -> Self {
        Self::with(Outcome::Session(session))
    }

    /// Every `get_session` call fails with `err`.
    pub fn failing(err: DomainError) -> Self {
        Self::with(Outcome::Failure(err))
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `get_session` calls made through gateways of this provider.
    pub fn session_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthGatewayProvider for StaticAuthProvider {
    fn gateway(
        &self,
        _credentials: &RequestCredentials,
    ) -> Result<Arc<dyn SessionGateway>, DomainError> {
        match &self.outcome {
            Outcome::Unavailable => Err(DomainError::AuthUnavailable("static provider".into())),
            other => Ok(Arc::new(StaticGateway {
                outcome: other.clone(),
                calls: Arc::clone(&self.calls),
            })),
        }
    }

    fn is_configured(&self) -> bool {
        !matches!(self.outcome, Outcome::Unavailable)
    }
}

struct StaticGateway {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl SessionGateway for StaticGateway {
    async fn get_session(&self) -> Result<Option<Session>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Session(s) => Ok(s.clone()),
            Outcome::Failure(e) => Err(e.clone()),
            Outcome::Unavailable => Err(DomainError::AuthUnavailable("static provider".into())),
        }
    }
}
