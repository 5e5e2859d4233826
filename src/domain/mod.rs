//! Domain layer - Core business entities and logic
//!
//! This module contains the user and license records held by the store,
//! independent of the HTTP and storage layers.

pub mod license;
pub mod user;

pub use license::License;
pub use user::{Mugshot, NewUser, User, UserMap, UserPatch, UserResponse};
