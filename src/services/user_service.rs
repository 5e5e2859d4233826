//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User, UserMap, UserPatch};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Snapshot of all users keyed by user key
    async fn list_users(&self) -> AppResult<UserMap>;

    /// Get user by key
    async fn get_user(&self, key: &str) -> AppResult<User>;

    /// Create a user, returning its assigned key and record
    async fn create_user(&self, new_user: NewUser) -> AppResult<(String, User)>;

    /// Apply a partial update and return the merged record
    async fn update_user(&self, key: &str, patch: UserPatch) -> AppResult<User>;

    /// Delete a user and return the remaining users
    async fn delete_user(&self, key: &str) -> AppResult<UserMap>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<UserMap> {
        let users = self.repo.list().await?;
        tracing::info!(count = users.len(), "Obtained users");
        Ok(users)
    }

    async fn get_user(&self, key: &str) -> AppResult<User> {
        let user = self.repo.find_by_key(key).await?.ok_or_not_found()?;
        tracing::info!(user_key = %key, "Obtained user");
        Ok(user)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<(String, User)> {
        let (key, user) = self.repo.create(new_user).await?;
        tracing::info!(
            user_key = %key,
            has_mugshot = user.mugshot.is_some(),
            "Created user"
        );
        Ok((key, user))
    }

    async fn update_user(&self, key: &str, patch: UserPatch) -> AppResult<User> {
        let user = self.repo.update(key, patch).await?;
        tracing::info!(user_key = %key, "Updated user");
        Ok(user)
    }

    async fn delete_user(&self, key: &str) -> AppResult<UserMap> {
        let remaining = self.repo.delete(key).await?;
        tracing::info!(user_key = %key, remaining = remaining.len(), "Deleted user");
        Ok(remaining)
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::MockUserRepository;

    fn test_user(name: &str) -> User {
        User::new(name.to_string(), "haha".to_string(), None)
    }

    fn service(repo: MockUserRepository) -> UserManager<MockUserRepository> {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_key()
            .withf(|key| key == "user1")
            .returning(|_| Ok(Some(test_user("john"))));

        let user = service(repo).get_user("user1").await.unwrap();
        assert_eq!(user.name, "john");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_key().returning(|_| Ok(None));

        let result = service(repo).get_user("user9").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_passes_patch_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|key, patch| key == "user1" && patch.age == Some(Some(31)))
            .times(1)
            .returning(|_, _| Ok(test_user("john").with_age(31)));

        let patch = UserPatch {
            age: Some(Some(31)),
            ..UserPatch::default()
        };
        let user = service(repo).update_user("user1", patch).await.unwrap();
        assert_eq!(user.age, Some(31));
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _| Err(AppError::NotFound));

        let result = service(repo).update_user("user9", UserPatch::default()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_user_returns_assigned_key() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|new_user| Ok(("user3".to_string(), User::from(new_user))));

        let (key, user) = service(repo)
            .create_user(NewUser {
                name: "ann".to_string(),
                password: "secret1".to_string(),
                mugshot: None,
            })
            .await
            .unwrap();

        assert_eq!(key, "user3");
        assert_eq!(user.name, "ann");
    }

    #[tokio::test]
    async fn test_delete_user_returns_snapshot() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().withf(|key| key == "user2").returning(|_| {
            let mut remaining = UserMap::new();
            remaining.insert("user1".to_string(), test_user("john"));
            Ok(remaining)
        });

        let remaining = service(repo).delete_user("user2").await.unwrap();
        assert!(remaining.contains_key("user1"));
        assert!(!remaining.contains_key("user2"));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            let mut users = UserMap::new();
            users.insert("user1".to_string(), test_user("john"));
            users.insert("user2".to_string(), test_user("doe"));
            Ok(users)
        });

        let users = service(repo).list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
