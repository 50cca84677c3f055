//! Application use cases. Orchestrate domain logic via ports.

pub mod resolving_splash;
pub mod session_service;
pub mod user_service;

pub use resolving_splash::{MountTicket, ResolvingSplash};
pub use session_service::SessionService;
pub use user_service::CurrentUserService;
