//! Short-link resolution states.
//!
//! `Idle -> Resolving -> {Redirecting | NotFound | Forbidden | Error}`.
//! The four outcome states are terminal; only a fresh mount leaves them.

use crate::domain::{DomainError, ResolvedLocation};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResolutionState {
    Idle,
    Resolving,
    Redirecting { location: ResolvedLocation },
    NotFound,
    Forbidden,
    Error { message: String },
}

impl ResolutionState {
    /// Map a resolver outcome onto its terminal state.
    pub fn from_outcome(outcome: Result<ResolvedLocation, DomainError>) -> Self {
        match outcome {
            Ok(location) => ResolutionState::Redirecting { location },
            Err(DomainError::EntityNotFound(_)) => ResolutionState::NotFound,
            Err(DomainError::EntityForbidden(_)) => ResolutionState::Forbidden,
            Err(e) => ResolutionState::Error {
                message: e.to_string(),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResolutionState::Idle | ResolutionState::Resolving)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResolutionState::Idle => "idle",
            ResolutionState::Resolving => "resolving",
            ResolutionState::Redirecting { .. } => "redirecting",
            ResolutionState::NotFound => "not_found",
            ResolutionState::Forbidden => "forbidden",
            ResolutionState::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_mapping() {
        let loc = ResolvedLocation {
            organization_id: "org1".into(),
            division_id: "div1".into(),
            workspace_path: "/org1/div1/workspace/channels/abc123".into(),
        };
        assert_eq!(
            ResolutionState::from_outcome(Ok(loc.clone())),
            ResolutionState::Redirecting { location: loc }
        );
        assert_eq!(
            ResolutionState::from_outcome(Err(DomainError::EntityNotFound("x".into()))),
            ResolutionState::NotFound
        );
        assert_eq!(
            ResolutionState::from_outcome(Err(DomainError::EntityForbidden("x".into()))),
            ResolutionState::Forbidden
        );
        let timeout = ResolutionState::from_outcome(Err(DomainError::Timeout { millis: 5000 }));
        assert_eq!(timeout.name(), "error");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ResolutionState::Idle.is_terminal());
        assert!(!ResolutionState::Resolving.is_terminal());
        assert!(ResolutionState::NotFound.is_terminal());
        assert!(ResolutionState::Forbidden.is_terminal());
        assert!(
            ResolutionState::Error {
                message: "boom".into()
            }
            .is_terminal()
        );
    }
}
