//! Service Container - Centralized service access.
//!
//! Owns the construction of the user store and the services built on it,
//! so the HTTP layer only ever sees service traits.

use std::sync::Arc;

use super::{UserManager, UserService};
use crate::config::Config;
use crate::infra::{seed_users, InMemoryUserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a container around an existing user service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create a container backed by a fresh in-memory store.
    ///
    /// The store is seeded with the fixture users when `config.seed_users` is set.
    pub fn in_memory(config: &Config) -> Self {
        let store = if config.seed_users {
            InMemoryUserStore::with_users(seed_users())
        } else {
            InMemoryUserStore::new()
        };
        tracing::debug!(seeded = config.seed_users, "User store initialized");

        Self::new(Arc::new(UserManager::new(Arc::new(store))))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_seeded() {
        let services = Services::in_memory(&Config::default());
        assert_eq!(services.users().count_users().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_in_memory_empty() {
        let config = Config {
            seed_users: false,
            ..Config::default()
        };
        let services = Services::in_memory(&config);
        assert_eq!(services.users().count_users().await.unwrap(), 0);
    }
}
