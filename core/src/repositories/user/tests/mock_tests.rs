//! Unit tests for mock user repository

use chrono::Utc;

use crate::domain::entities::{Listing, Role, RoleName, User};
use crate::errors::{DomainError, UserError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(username: &str) -> User {
    let mut user = User::new(
        username.to_string(),
        "hash".to_string(),
        format!("{}@example.com", username),
        username.to_uppercase(),
        None,
    );
    user.assign_role(Role::new(1, RoleName::Guest));
    user
}

#[tokio::test]
async fn test_mock_repository_create_assigns_ids() {
    let repo = MockUserRepository::new();

    let first = repo.create(user("alice")).await.unwrap();
    let second = repo.create(user("bob")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_persisted());

    let found = repo.find_by_username("bob").await.unwrap().unwrap();
    assert_eq!(found.id, 2);
    assert!(found.has_role(RoleName::Guest));
}

#[tokio::test]
async fn test_mock_repository_duplicate_username() {
    let repo = MockUserRepository::new();

    repo.create(user("alice")).await.unwrap();
    let result = repo.create(user("alice")).await;

    assert!(matches!(
        result,
        Err(DomainError::User(UserError::UsernameExists))
    ));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_mock_repository_find_all_in_insertion_order() {
    let repo = MockUserRepository::new();
    for name in ["carol", "alice", "bob"] {
        repo.create(user(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_mock_repository_update_missing_user() {
    let repo = MockUserRepository::new();
    let mut ghost = user("ghost");
    ghost.id = 99;

    let result = repo.update(ghost).await;
    assert!(matches!(result, Err(DomainError::User(UserError::UserNotFound))));
}

#[tokio::test]
async fn test_mock_repository_favorites() {
    let repo = MockUserRepository::new();
    let alice = repo.create(user("alice")).await.unwrap();

    assert!(repo.find_favorites(alice.id).await.unwrap().is_empty());

    repo.add_favorite(
        alice.id,
        Listing {
            id: 42,
            host_id: 7,
            title: "Loft".to_string(),
            address: "Hanoi".to_string(),
            thumbnail_url: None,
            nightly_price: 100,
            max_guests: 2,
            created_at: Utc::now(),
        },
    )
    .await;

    let favorites = repo.find_favorites(alice.id).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, 42);
}
