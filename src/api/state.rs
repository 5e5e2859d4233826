//! Application state - Dependency injection container.
//!
//! Provides handlers with access to the application services.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by a fresh in-memory store.
    ///
    /// This is the composition root: the store is created here and lives
    /// as long as the router holding this state.
    pub fn from_config(config: Config) -> Self {
        let services = Services::in_memory(&config);

        Self::new(services.users(), config)
    }

    /// Create new application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, config: Config) -> Self {
        Self {
            user_service,
            config: Arc::new(config),
        }
    }
}
