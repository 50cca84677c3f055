//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod resolution;

pub use entities::{
    EntityReference, EntityType, RequestCredentials, ResolvedLocation, Session, SessionUser,
    WorkspaceUser,
};
pub use errors::DomainError;
pub use resolution::ResolutionState;
