//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and storage to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use user_service::{UserManager, UserService};
