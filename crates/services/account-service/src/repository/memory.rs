//! In-memory account repository for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::AccountRepository;
use common::{AppError, AppResult};
use domain::UserAccount;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, UserAccount>,
    id_by_email: HashMap<String, Uuid>,
}

/// Process-local account store.
///
/// The email index is checked and updated under the same write lock as the
/// account map, so concurrent saves of one email cannot both succeed.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Accounts>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn save(&self, account: UserAccount) -> AppResult<UserAccount> {
        let mut accounts = self.accounts.write().await;
        let user_id = account.user_id();
        let email = account.email().value().to_string();

        if let Some(owner) = accounts.id_by_email.get(&email) {
            if *owner != user_id {
                return Err(AppError::conflict("Email"));
            }
        }

        // An update may change the email; drop the stale index entry
        let previous_email = accounts
            .by_id
            .get(&user_id)
            .map(|existing| existing.email().value().to_string());
        if let Some(previous) = previous_email {
            accounts.id_by_email.remove(&previous);
        }

        accounts.id_by_email.insert(email, user_id);
        accounts.by_id.insert(user_id, account.clone());

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .id_by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.accounts.read().await.id_by_email.contains_key(email))
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<UserAccount>> {
        Ok(self.accounts.read().await.by_id.get(&user_id).cloned())
    }
}
