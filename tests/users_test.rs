/*!
 * User Registration and Authentication Integration Tests
 *
 * Covers registration (id generation, duplicate-username rejection, empty
 * field validation) and the credential check under both the plaintext parity
 * scheme and argon2 hashing.
 */

mod common;

use common::*;
use expenseflow::users::{Argon2Hash, CredentialScheme, PlainText};
use expenseflow::{ExpenseStore, StoreError};
use tempfile::TempDir;

#[tokio::test]
async fn add_user_returns_public_view_with_generated_id() {
    let (mut store, _tmp) = open_test_store().await;

    let user = store.add_user("alice", "secret").await.unwrap();
    assert!(!user.id.is_empty());
    assert_eq!(user.username, "alice");
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn duplicate_usernames_are_rejected() {
    let (mut store, _tmp) = open_test_store().await;
    seed_user(&mut store, "alice", "secret").await;

    let result = store.add_user("alice", "other-password").await;
    match result {
        Err(StoreError::DuplicateUsername(name)) => assert_eq!(name, "alice"),
        other => panic!("expected DuplicateUsername, got {:?}", other),
    }
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn empty_username_or_password_is_a_validation_error() {
    let (mut store, _tmp) = open_test_store().await;

    let result = store.add_user("  ", "").await;
    match result {
        Err(StoreError::Validation(fields)) => {
            assert!(fields.contains(&"username".to_string()));
            assert!(fields.contains(&"password".to_string()));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn authentication_requires_exact_username_and_password_match() {
    let (mut store, _tmp) = open_test_store().await;
    let alice = seed_user(&mut store, "alice", "secret").await;

    let found = store.authenticate_user("alice", "secret");
    assert_eq!(found, Some(alice));

    assert!(store.authenticate_user("alice", "Secret").is_none());
    assert!(store.authenticate_user("alice", "secret ").is_none());
    assert!(store.authenticate_user("Alice", "secret").is_none());
    assert!(store.authenticate_user("bob", "secret").is_none());
    assert!(store.authenticate_user("alice", "").is_none());
}

#[tokio::test]
async fn seed_demo_data_is_idempotent() {
    let (mut store, _tmp) = open_test_store().await;

    store.seed_demo_data().await.unwrap();
    store.seed_demo_data().await.unwrap();
    assert_eq!(store.user_count(), 1);
    assert!(store.authenticate_user("demo", "password123").is_some());
}

#[tokio::test]
async fn argon2_scheme_does_not_store_plaintext_but_still_verifies() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().to_str().unwrap().to_string();
    let mut store = ExpenseStore::open(&data_path, Box::new(Argon2Hash))
        .await
        .unwrap();

    store.add_user("alice", "secret").await.unwrap();
    assert!(store.authenticate_user("alice", "secret").is_some());
    assert!(store.authenticate_user("alice", "wrong").is_none());

    // A store reopened with the same scheme still verifies the hash.
    drop(store);
    let store = ExpenseStore::open(&data_path, Box::new(Argon2Hash))
        .await
        .unwrap();
    assert!(store.authenticate_user("alice", "secret").is_some());
}

#[test]
fn credential_schemes_round_trip() {
    let plain = PlainText;
    let stored = plain.store_form("secret").unwrap();
    assert_eq!(stored, "secret");
    assert!(plain.verify("secret", &stored));
    assert!(!plain.verify("other", &stored));

    let argon = Argon2Hash;
    let stored = argon.store_form("secret").unwrap();
    assert_ne!(stored, "secret");
    assert!(stored.starts_with("$argon2"));
    assert!(argon.verify("secret", &stored));
    assert!(!argon.verify("other", &stored));
    assert!(!argon.verify("secret", "not-a-phc-string"));
}
