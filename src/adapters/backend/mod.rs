//! Backend API adapters. Entity resolution and the workspace user lookup.

pub mod mock_resolver;
pub mod resolver;
pub mod users;

pub use mock_resolver::MockEntityResolver;
pub use resolver::HttpEntityResolver;
pub use users::HttpUserDirectory;
