//! Account repository contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::{user_account, user_account_role};
use common::{AppError, AppResult};
use domain::{Email, RoleCode, RoleSet, UserAccount};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account persistence and uniqueness lookups.
///
/// Implementations must reject a second account with an email already owned
/// by another account at write time, reporting it as [`AppError::Conflict`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert the account, or update it if its id already exists
    async fn save(&self, account: UserAccount) -> AppResult<UserAccount>;

    /// Find account by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>>;

    /// Check whether any account uses this exact email address
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Find account by identifier
    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<UserAccount>>;
}

/// SeaORM-backed account repository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_roles(&self, user_id: Uuid) -> AppResult<Vec<user_account_role::Model>> {
        user_account_role::Entity::find()
            .filter(user_account_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn hydrate(&self, row: Option<user_account::Model>) -> AppResult<Option<UserAccount>> {
        match row {
            Some(model) => {
                let roles = self.load_roles(model.user_id).await?;
                into_domain(model, roles).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn save(&self, account: UserAccount) -> AppResult<UserAccount> {
        let user_id = account.user_id();
        let txn = self.db.begin().await?;

        let exists = user_account::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .is_some();

        let row = user_account::ActiveModel {
            user_id: Set(user_id),
            full_name: Set(account.full_name().to_string()),
            email: Set(account.email().value().to_string()),
            password_hash: Set(account.password_hash().to_string()),
        };

        let written = if exists {
            row.update(&txn).await
        } else {
            row.insert(&txn).await
        };
        written.map_err(classify_write_error)?;

        // Replace the role set wholesale
        user_account_role::Entity::delete_many()
            .filter(user_account_role::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let role_rows = account
            .roles()
            .iter()
            .map(|role| user_account_role::ActiveModel {
                user_id: Set(user_id),
                role_name: Set(role.as_str().to_string()),
            })
            .collect::<Vec<_>>();

        if !role_rows.is_empty() {
            user_account_role::Entity::insert_many(role_rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        tracing::debug!(%user_id, "Account persisted");

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        let row = user_account::Entity::find()
            .filter(user_account::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        self.hydrate(row).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = user_account::Entity::find()
            .filter(user_account::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<UserAccount>> {
        let row = user_account::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?;

        self.hydrate(row).await
    }
}

/// A unique violation on write can only come from the email index.
fn classify_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
        _ => AppError::from(err),
    }
}

/// Convert stored rows to the domain entity
fn into_domain(
    model: user_account::Model,
    role_rows: Vec<user_account_role::Model>,
) -> AppResult<UserAccount> {
    let user_account::Model {
        user_id,
        full_name,
        email,
        password_hash,
    } = model;

    let email = Email::of(email).map_err(|e| {
        AppError::internal(format!("Stored email of account {} is invalid: {}", user_id, e))
    })?;

    let roles = role_rows
        .into_iter()
        .map(|row| {
            row.role_name.parse::<RoleCode>().map_err(|e| {
                AppError::internal(format!("Stored role of account {} is invalid: {}", user_id, e))
            })
        })
        .collect::<AppResult<RoleSet>>()?;

    Ok(UserAccount::new(user_id, full_name, email, password_hash, roles))
}
