//! Integration tests for the user repository.

mod common;

use moneymatic_db::{UserError, UserRepository};
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_user_create_and_find() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let email = format!("test-{}@example.com", Uuid::new_v4());

    let user = repo
        .create("Ana", &email, "$argon2id$test_hash")
        .await
        .expect("Failed to create user");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, email);

    let by_id = repo.find_by_id(user.id).await.unwrap().expect("User should exist");
    assert_eq!(by_id.email, email);

    let by_email = repo.find_by_email(&email).await.unwrap().expect("User should exist");
    assert_eq!(by_email.id, user.id);

    assert!(repo.email_exists(&email).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_email_rejected() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let user = common::create_user(&db).await;

    let result = repo.create("Other", &user.email, "$argon2id$x").await;
    assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_update_profile_and_password() {
    let db = common::setup().await;
    let repo = UserRepository::new(db.clone());
    let user = common::create_user(&db).await;
    let other = common::create_user(&db).await;

    let new_email = format!("renamed-{}@example.com", Uuid::new_v4());
    let updated = repo.update_profile(user.id, "Renamed", &new_email).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, new_email);

    let clash = repo.update_profile(user.id, "Renamed", &other.email).await;
    assert!(matches!(clash, Err(UserError::DuplicateEmail(_))));

    repo.update_password(user.id, "$argon2id$new_hash").await.unwrap();
    let reloaded = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new_hash");

    let missing = repo.update_password(Uuid::new_v4(), "$argon2id$x").await;
    assert!(matches!(missing, Err(UserError::NotFound(_))));
}
