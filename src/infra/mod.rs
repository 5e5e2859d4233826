//! Infrastructure layer - Storage behind the service layer
//!
//! The user store lives in process memory and is discarded on shutdown.

pub mod repositories;
pub mod seed;

pub use repositories::{InMemoryUserStore, UserRepository};
pub use seed::seed_users;
