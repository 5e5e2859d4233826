//! User Registry - In-memory user and license CRUD service
//!
//! An HTTP API over a process-local collection of user records, each
//! holding an optional mugshot and a list of licenses. Nothing is
//! persisted; the store lives exactly as long as the server.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User, license and partial-update types
//! - **services**: Application use cases
//! - **infra**: The in-memory user store and its fixtures
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start with an empty store on another port
//! cargo run -- serve --port 8080 --no-seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{License, User, UserPatch};
pub use errors::{AppError, AppResult};
