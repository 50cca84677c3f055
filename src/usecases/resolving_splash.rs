//! Short-link resolution: entity reference -> canonical workspace path.
//!
//! - One resolution attempt per mount, bounded by a timeout; no polling, no retry
//! - Every mount issues a ticket; results carrying an outdated ticket are discarded
//! - A successful result replaces the current history entry via the Navigator
//! - NotFound, Forbidden and Error are terminal until the next mount

use crate::domain::{DomainError, EntityReference, ResolutionState, ResolvedLocation};
use crate::ports::{EntityResolver, Navigator};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Issued by `mount`. Identifies which mount a resolution result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
    reference: EntityReference,
}

impl MountTicket {
    pub fn reference(&self) -> &EntityReference {
        &self.reference
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

struct SplashInner {
    generation: u64,
    mounted: Option<EntityReference>,
    state: ResolutionState,
    attempted: bool,
}

pub struct ResolvingSplash {
    resolver: Arc<dyn EntityResolver>,
    navigator: Arc<dyn Navigator>,
    timeout: Duration,
    inner: Mutex<SplashInner>,
}

impl ResolvingSplash {
    pub fn new(
        resolver: Arc<dyn EntityResolver>,
        navigator: Arc<dyn Navigator>,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            navigator,
            timeout,
            inner: Mutex::new(SplashInner {
                generation: 0,
                mounted: None,
                state: ResolutionState::Idle,
                attempted: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SplashInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> ResolutionState {
        self.lock().state.clone()
    }

    /// Currently mounted reference, if any.
    pub fn mounted(&self) -> Option<EntityReference> {
        self.lock().mounted.clone()
    }

    /// Idle -> Resolving for `reference`. Invalidates any earlier ticket.
    pub fn mount(&self, reference: EntityReference) -> MountTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.mounted = Some(reference.clone());
        inner.state = ResolutionState::Resolving;
        inner.attempted = false;
        debug!(entity = %reference, generation = inner.generation, "splash mounted");
        MountTicket {
            generation: inner.generation,
            reference,
        }
    }

    /// Back to Idle; in-flight results for earlier tickets will be dropped.
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.mounted = None;
        inner.state = ResolutionState::Idle;
        inner.attempted = false;
    }

    /// Run the single resolution attempt for `ticket` and apply its result.
    ///
    /// Returns the splash state afterwards. A second call for the same ticket, or a call
    /// with a stale ticket, does not reach the resolver.
    pub async fn resolve(
        &self,
        ticket: &MountTicket,
        access_token: Option<&str>,
    ) -> ResolutionState {
        {
            let mut inner = self.lock();
            if inner.generation != ticket.generation || inner.attempted {
                return inner.state.clone();
            }
            inner.attempted = true;
        }

        let outcome = match tokio::time::timeout(
            self.timeout,
            self.resolver.resolve(&ticket.reference, access_token),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(DomainError::Timeout {
                millis: self.timeout.as_millis() as u64,
            }),
        };

        self.apply(ticket, outcome);
        self.state()
    }

    /// Apply a resolver outcome. Returns false when the ticket is stale or the
    /// mount has already settled, in which case nothing changes and nothing navigates.
    pub fn apply(
        &self,
        ticket: &MountTicket,
        outcome: Result<ResolvedLocation, DomainError>,
    ) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            debug!(
                entity = %ticket.reference,
                ticket = ticket.generation,
                current = inner.generation,
                "discarding stale resolution"
            );
            return false;
        }
        if inner.state != ResolutionState::Resolving {
            return false;
        }

        let next = match ResolutionState::from_outcome(outcome) {
            ResolutionState::Redirecting { location } if !location.has_local_path() => {
                warn!(
                    entity = %ticket.reference,
                    path = %location.workspace_path,
                    "resolver returned non-local path"
                );
                ResolutionState::Error {
                    message: "resolved location is not a workspace path".into(),
                }
            }
            other => other,
        };

        match &next {
            ResolutionState::Redirecting { location } => {
                info!(
                    entity = %ticket.reference,
                    path = %location.workspace_path,
                    "short link resolved"
                );
                // Navigate under the lock so a concurrent remount cannot interleave.
                self.navigator.replace(&location.workspace_path);
            }
            ResolutionState::Error { message } => {
                warn!(entity = %ticket.reference, error = %message, "short link resolution failed");
            }
            other => {
                info!(entity = %ticket.reference, state = other.name(), "short link not resolvable");
            }
        }
        inner.state = next;
        true
    }

    /// Mount `reference` and resolve it.
    pub async fn run(
        &self,
        reference: EntityReference,
        access_token: Option<&str>,
    ) -> ResolutionState {
        let ticket = self.mount(reference);
        self.resolve(&ticket, access_token).await
    }
}
