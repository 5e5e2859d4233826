//! User service tests over the in-memory store.

use std::sync::Arc;

use chrono::NaiveDate;

use user_registry::domain::{License, NewUser, User, UserPatch};
use user_registry::errors::AppError;
use user_registry::infra::{seed_users, InMemoryUserStore};
use user_registry::services::{UserManager, UserService};

fn license() -> License {
    License::new(
        "L1",
        "Perfectly fair",
        NaiveDate::from_ymd_opt(2004, 4, 26).unwrap(),
        NaiveDate::from_ymd_opt(2024, 4, 25).unwrap(),
    )
}

fn service_with(users: Vec<(String, User)>) -> UserManager<InMemoryUserStore> {
    UserManager::new(Arc::new(InMemoryUserStore::with_users(users)))
}

fn seeded_service() -> UserManager<InMemoryUserStore> {
    service_with(seed_users())
}

fn new_user(name: &str, password: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        password: password.to_string(),
        mugshot: None,
    }
}

#[tokio::test]
async fn test_get_returns_last_written_record() {
    let service = seeded_service();

    let patch = UserPatch {
        name: Some("johnny".to_string()),
        ..UserPatch::default()
    };
    let updated = service.update_user("user1", patch).await.unwrap();

    assert_eq!(service.get_user("user1").await.unwrap(), updated);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let service = seeded_service();
    let result = service.get_user("user9").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_only_age_keeps_other_fields() {
    let john = User::new("john".to_string(), "haha".to_string(), None)
        .with_age(30)
        .with_license(license());
    let service = service_with(vec![("user1".to_string(), john)]);

    let patch: UserPatch = serde_json::from_str(r#"{"age": 31}"#).unwrap();
    service.update_user("user1", patch).await.unwrap();

    let stored = service.get_user("user1").await.unwrap();
    assert_eq!(stored.name, "john");
    assert_eq!(stored.password, "haha");
    assert_eq!(stored.age, Some(31));
    assert_eq!(stored.licenses, vec![license()]);
}

#[tokio::test]
async fn test_create_grows_store_and_follows_key_rule() {
    let service = seeded_service();
    assert_eq!(service.count_users().await.unwrap(), 2);

    let (key, user) = service.create_user(new_user("ann", "secret1")).await.unwrap();

    assert_eq!(key, "user3");
    assert_eq!(user.name, "ann");
    assert_eq!(service.count_users().await.unwrap(), 3);
    assert_eq!(service.get_user("user3").await.unwrap(), user);
}

#[tokio::test]
async fn test_delete_removes_key_from_snapshot() {
    let service = seeded_service();

    let remaining = service.delete_user("user2").await.unwrap();

    assert_eq!(remaining.len(), 1);
    assert!(remaining.contains_key("user1"));
    assert!(matches!(
        service.get_user("user2").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_missing_user_leaves_store_untouched() {
    let service = seeded_service();

    let result = service.delete_user("user9").await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(service.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_is_ordered_by_key() {
    let service = service_with(vec![]);
    for name in ["ann", "bob", "cat"] {
        service.create_user(new_user(name, "pass")).await.unwrap();
    }

    let users = service.list_users().await.unwrap();
    let keys: Vec<&str> = users.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["user1", "user2", "user3"]);
}
