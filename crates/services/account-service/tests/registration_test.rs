//! Registration workflow tests against the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use account_service_lib::repository::{AccountRepository, InMemoryAccountStore};
use account_service_lib::service::{AccountRegistration, RegisterUserCommand, RegisterUserUseCase};
use account_service_lib::AccountServices;
use common::{AppError, AppResult};
use domain::{Argon2Hasher, RoleCode, RoleSet, UserAccount};

fn command(email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        full_name: "Ticket Buyer".to_string(),
        email: email.to_string(),
        raw_password: password.to_string(),
    }
}

fn use_case(store: Arc<dyn AccountRepository>) -> RegisterUserUseCase {
    RegisterUserUseCase::new(store, Arc::new(Argon2Hasher::new()))
}

/// Store whose pre-check never sees existing accounts, so every duplicate
/// must be caught at save time.
struct StalePrecheckStore {
    inner: InMemoryAccountStore,
}

#[async_trait]
impl AccountRepository for StalePrecheckStore {
    async fn save(&self, account: UserAccount) -> AppResult<UserAccount> {
        self.inner.save(account).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        self.inner.find_by_email(email).await
    }

    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Ok(false)
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<UserAccount>> {
        self.inner.find_by_id(user_id).await
    }
}

#[tokio::test]
async fn test_registration_persists_customer_account() {
    let store = Arc::new(InMemoryAccountStore::new());
    let registration = use_case(store.clone());

    let user_id = registration
        .execute(command("fan@example.com", "correct horse battery"))
        .await
        .unwrap();

    assert!(store.exists_by_email("fan@example.com").await.unwrap());

    let stored = store.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(stored.user_id(), user_id);
    assert_eq!(stored.full_name(), "Ticket Buyer");
    assert_eq!(stored.roles(), &RoleSet::from([RoleCode::Customer]));
    assert!(!stored.is_staff());
    assert_ne!(stored.password_hash(), "correct horse battery");
    assert!(Argon2Hasher::new().verify("correct horse battery", stored.password_hash()));
}

#[tokio::test]
async fn test_duplicate_registration_leaves_store_unchanged() {
    let store = Arc::new(InMemoryAccountStore::new());
    let registration = use_case(store.clone());

    let first = registration
        .execute(command("fan@example.com", "first-password"))
        .await
        .unwrap();
    let before = store.find_by_id(first).await.unwrap().unwrap();

    let second = registration
        .execute(command("fan@example.com", "second-password"))
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(store.len().await, 1);
    let after = store.find_by_email("fan@example.com").await.unwrap().unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_malformed_email_registers_nothing() {
    let store = Arc::new(InMemoryAccountStore::new());
    let registration = use_case(store.clone());

    let result = registration
        .execute(command("not-an-email", "whatever-password"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_emails_differing_only_by_case_are_distinct_accounts() {
    let store = Arc::new(InMemoryAccountStore::new());
    let registration = use_case(store.clone());

    let lower = registration
        .execute(command("user@example.com", "password-one"))
        .await
        .unwrap();
    let mixed = registration
        .execute(command("User@Example.com", "password-two"))
        .await
        .unwrap();

    assert_ne!(lower, mixed);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_save_time_uniqueness_violation_is_a_conflict() {
    let store = Arc::new(StalePrecheckStore {
        inner: InMemoryAccountStore::new(),
    });
    let registration = use_case(store.clone());

    let (a, b) = tokio::join!(
        registration.execute(command("race@example.com", "password-a")),
        registration.execute(command("race@example.com", "password-b")),
    );

    let outcomes = [a, b];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(store.inner.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_of_one_email_yield_one_account() {
    let store = Arc::new(InMemoryAccountStore::new());
    let registration = Arc::new(use_case(store.clone()));

    let handles = (0..8)
        .map(|i| {
            let registration = registration.clone();
            tokio::spawn(async move {
                registration
                    .execute(command("crowd@example.com", &format!("password-{}", i)))
                    .await
            })
        })
        .collect::<Vec<_>>();

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(id) => winners.push(id),
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.len().await, 1);
    let stored = store.find_by_email("crowd@example.com").await.unwrap().unwrap();
    assert_eq!(stored.user_id(), winners[0]);
}

#[tokio::test]
async fn test_wired_services_register_through_trait_object() {
    let services = AccountServices::with_repository(Arc::new(InMemoryAccountStore::new()));

    let user_id = services
        .registration
        .execute(command("wired@example.com", "wired-password"))
        .await
        .unwrap();

    let stored = services.accounts.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(stored.email().value(), "wired@example.com");
    assert!(services.ping().await.is_ok());
}
