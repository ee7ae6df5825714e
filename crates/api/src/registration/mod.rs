//! Account registration pipeline.
//!
//! A registration request runs through these steps in order, stopping at the
//! first failure:
//!
//! 1. Field rules, see [`bookshelf_core::validation::Rule::ORDER`].
//! 2. Credential derivation (random salt, salted hash).
//! 3. Account and credential insert in a single store transaction.
//! 4. Session token issuance.
//!
//! The store sits behind [`AccountStore`] so the pipeline can run against an
//! in-memory store in tests.

use std::sync::Arc;

use async_trait::async_trait;
use bookshelf_core::credentials::SaltedCredential;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_core::validation::{validate_registration, RegistrationForm};
use bookshelf_db::error::StoreError;
use bookshelf_db::models::account::CreateAccount;
use bookshelf_db::repositories::AccountRepo;
use bookshelf_db::DbPool;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::error::{AppError, AppResult};

/// Persists a new account together with its credential.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Write both rows atomically and return the generated account id.
    ///
    /// Unique violations must come back as [`StoreError::Conflict`].
    async fn create_account(
        &self,
        account: &CreateAccount,
        credential: &SaltedCredential,
    ) -> Result<DbId, StoreError>;
}

/// [`AccountStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create_account(
        &self,
        account: &CreateAccount,
        credential: &SaltedCredential,
    ) -> Result<DbId, StoreError> {
        let created = AccountRepo::create_with_credential(&self.pool, account, credential).await?;
        Ok(created.id)
    }
}

/// A completed registration.
#[derive(Debug, Clone)]
pub struct Registered {
    pub id: DbId,
    pub access_token: String,
}

/// Runs registration requests against an injected store and signing config.
#[derive(Clone)]
pub struct RegistrationPipeline {
    store: Arc<dyn AccountStore>,
    jwt: JwtConfig,
}

impl RegistrationPipeline {
    pub fn new(store: Arc<dyn AccountStore>, jwt: JwtConfig) -> Self {
        Self { store, jwt }
    }

    /// Validate `form`, create the account and issue its session token.
    ///
    /// Rule failures become [`CoreError::Validation`] carrying the rule's API
    /// message. Store errors are returned as-is; each store call is made once.
    pub async fn register(&self, form: &RegistrationForm) -> AppResult<Registered> {
        let input = validate_registration(form).map_err(|rule| {
            tracing::debug!(?rule, "Registration rejected");
            CoreError::Validation(rule.api_message().to_string())
        })?;

        let credential = SaltedCredential::derive(&input.password);
        let account = CreateAccount {
            firstname: input.firstname,
            lastname: input.lastname,
            username: input.username,
            email: input.email,
            phone: input.phone,
            role: input.role,
        };

        let id = self.store.create_account(&account, &credential).await?;

        let access_token = generate_access_token(id, account.role, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        tracing::info!(account_id = id, role = account.role, "Account registered");

        Ok(Registered { id, access_token })
    }
}
