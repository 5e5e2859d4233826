//! User repository with an in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::USER_KEY_PREFIX;
use crate::domain::{NewUser, User, UserMap, UserPatch};
use crate::errors::{AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every stored user
    async fn list(&self) -> AppResult<UserMap>;

    /// Find user by key
    async fn find_by_key(&self, key: &str) -> AppResult<Option<User>>;

    /// Store a new user under a freshly allocated key
    async fn create(&self, new_user: NewUser) -> AppResult<(String, User)>;

    /// Merge a partial update into an existing user
    async fn update(&self, key: &str, patch: UserPatch) -> AppResult<User>;

    /// Remove a user and return what remains
    async fn delete(&self, key: &str) -> AppResult<UserMap>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// In-memory implementation of UserRepository.
///
/// Mutations hold the write lock for their whole read-modify-write
/// sequence, so concurrent requests never observe a half-applied update.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<UserMap>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records
    pub fn with_users(users: impl IntoIterator<Item = (String, User)>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }
}

/// Allocate `"user" + (size + 1)`, skipping forward past keys still taken.
/// A gap left by a deletion can make the first candidate collide.
fn next_key(users: &UserMap) -> String {
    let mut n = users.len() + 1;
    loop {
        let key = format!("{USER_KEY_PREFIX}{n}");
        if !users.contains_key(&key) {
            return key;
        }
        n += 1;
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> AppResult<UserMap> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(key).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<(String, User)> {
        let mut users = self.users.write().await;

        let key = next_key(&users);
        let user = User::from(new_user);
        users.insert(key.clone(), user.clone());

        Ok((key, user))
    }

    async fn update(&self, key: &str, patch: UserPatch) -> AppResult<User> {
        let mut users = self.users.write().await;

        let user = users.get_mut(key).ok_or_not_found()?;
        user.apply(patch);

        Ok(user.clone())
    }

    async fn delete(&self, key: &str) -> AppResult<UserMap> {
        let mut users = self.users.write().await;

        users.remove(key).ok_or_not_found()?;

        Ok(users.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}
