//! Repository for the `accounts` and `account_credentials` tables.

use bookshelf_core::credentials::SaltedCredential;
use bookshelf_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::account::{Account, CreateAccount};
use crate::models::credential::{AccountLogin, Credential};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, firstname, lastname, username, email, phone, role, created_at";

/// Provides account creation and lookups.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert an account and its credential in one transaction.
    ///
    /// Either both rows are written or neither is: a failure on the
    /// credential insert rolls the account insert back, so an account never
    /// exists without a credential.
    pub async fn create_with_credential(
        pool: &PgPool,
        input: &CreateAccount,
        credential: &SaltedCredential,
    ) -> Result<Account, StoreError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO accounts (firstname, lastname, username, email, phone, role, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, NOW())
             RETURNING {COLUMNS}"
        );
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.role)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO account_credentials (account_id, salted_hash, salt)
             VALUES ($1, $2, $3)",
        )
        .bind(account.id)
        .bind(&credential.salted_hash)
        .bind(&credential.salt)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(account)
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// List all accounts, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Account>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY created_at DESC, id DESC");
        let accounts = sqlx::query_as::<_, Account>(&query).fetch_all(pool).await?;
        Ok(accounts)
    }

    /// Look up the credential and role for the account with `email`.
    pub async fn find_login_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AccountLogin>, StoreError> {
        let login = sqlx::query_as::<_, AccountLogin>(
            "SELECT a.id AS account_id, a.role, c.salted_hash, c.salt
             FROM accounts a
             INNER JOIN account_credentials c ON c.account_id = a.id
             WHERE a.email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(login)
    }

    /// Fetch the stored credential for an account.
    pub async fn find_credential(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<Credential>, StoreError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT account_id, salted_hash, salt FROM account_credentials WHERE account_id = $1",
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?;
        Ok(credential)
    }
}
