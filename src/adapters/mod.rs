//! Infrastructure adapters. Implement outbound ports, serve the inbound HTTP surface.
//!
//! Identity provider, backend API, axum. Map errors to DomainError.

pub mod auth;
pub mod backend;
pub mod http;
