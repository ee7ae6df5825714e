//! Credential rows and the login lookup projection.

use bookshelf_core::credentials::SaltedCredential;
use bookshelf_core::types::DbId;
use sqlx::FromRow;

/// Row from `account_credentials`. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub account_id: DbId,
    pub salted_hash: String,
    pub salt: String,
}

impl Credential {
    pub fn salted(&self) -> SaltedCredential {
        SaltedCredential {
            salt: self.salt.clone(),
            salted_hash: self.salted_hash.clone(),
        }
    }
}

/// Account id and role joined with the stored credential, looked up by email.
#[derive(Debug, Clone, FromRow)]
pub struct AccountLogin {
    pub account_id: DbId,
    pub role: i16,
    pub salted_hash: String,
    pub salt: String,
}

impl AccountLogin {
    pub fn salted(&self) -> SaltedCredential {
        SaltedCredential {
            salt: self.salt.clone(),
            salted_hash: self.salted_hash.clone(),
        }
    }
}
