//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    DomainError, EntityReference, RequestCredentials, ResolvedLocation, Session, WorkspaceUser,
};
use std::sync::Arc;

/// Session retrieval from the identity provider, bound to one request's credentials.
#[async_trait::async_trait]
pub trait SessionGateway: Send + Sync {
    /// Current authenticated session, or `None` when anonymous.
    async fn get_session(&self) -> Result<Option<Session>, DomainError>;
}

/// Builds a `SessionGateway` for a request.
///
/// Returns `DomainError::AuthUnavailable` when the identity provider is not configured.
pub trait AuthGatewayProvider: Send + Sync {
    fn gateway(
        &self,
        credentials: &RequestCredentials,
    ) -> Result<Arc<dyn SessionGateway>, DomainError>;

    /// True when `gateway` can succeed.
    fn is_configured(&self) -> bool;
}

/// Maps an entity reference to its canonical workspace location.
#[async_trait::async_trait]
pub trait EntityResolver: Send + Sync {
    /// Resolve `reference`. `access_token` is forwarded so the backend can apply
    /// the caller's permissions.
    ///
    /// # Errors
    /// `EntityNotFound`, `EntityForbidden`, `NetworkFailure` or `Unexpected`.
    async fn resolve(
        &self,
        reference: &EntityReference,
        access_token: Option<&str>,
    ) -> Result<ResolvedLocation, DomainError>;
}

/// Backend lookup of the workspace user behind an access token.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// `None` on any failure; failures are logged, never returned.
    async fn current_user(&self, access_token: &str) -> Option<WorkspaceUser>;
}
