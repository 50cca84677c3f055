//! Mock resolver for testing without a backend.
//!
//! Returns preset outcomes per entity id, with optional per-id latency.

use crate::domain::{DomainError, EntityReference, ResolvedLocation};
use crate::ports::EntityResolver;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Unknown ids resolve to `EntityNotFound`.
#[derive(Default)]
pub struct MockEntityResolver {
    outcomes: HashMap<String, Result<ResolvedLocation, DomainError>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockEntityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, entity_id: &str, location: ResolvedLocation) -> Self {
        self.outcomes.insert(entity_id.to_string(), Ok(location));
        self
    }

    pub fn with_error(mut self, entity_id: &str, err: DomainError) -> Self {
        self.outcomes.insert(entity_id.to_string(), Err(err));
        self
    }

    /// Simulated network delay for one id.
    pub fn with_delay(mut self, entity_id: &str, delay: Duration) -> Self {
        self.delays.insert(entity_id.to_string(), delay);
        self
    }

    /// Ids passed to `resolve`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl EntityResolver for MockEntityResolver {
    async fn resolve(
        &self,
        reference: &EntityReference,
        _access_token: Option<&str>,
    ) -> Result<ResolvedLocation, DomainError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(reference.entity_id.clone());

        if let Some(delay) = self.delays.get(&reference.entity_id) {
            tokio::time::sleep(*delay).await;
        }

        self.outcomes
            .get(&reference.entity_id)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::EntityNotFound(reference.to_string())))
    }
}
