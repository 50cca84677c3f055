//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure
//! - Navigation: Called by the splash once a short link resolves

pub mod navigation;
pub mod outbound;

pub use navigation::Navigator;
pub use outbound::{AuthGatewayProvider, EntityResolver, SessionGateway, UserDirectory};
