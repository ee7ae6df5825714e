//! Store-level errors.

use std::fmt;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Account columns guarded by a unique constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl UniqueField {
    /// Map a constraint name from the initial migration to its field.
    pub fn from_constraint(name: &str) -> Option<Self> {
        match name {
            "uq_accounts_username" => Some(UniqueField::Username),
            "uq_accounts_email" => Some(UniqueField::Email),
            _ => None,
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Username => f.write_str("username"),
            UniqueField::Email => f.write_str("email"),
        }
    }
}

/// Errors returned by the repositories.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert collided with an existing username or email.
    #[error("Duplicate {0}")]
    Conflict(UniqueField),

    /// Anything else the database reported.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match unique_violation(&err) {
            Some(field) => StoreError::Conflict(field),
            None => StoreError::Database(err),
        }
    }
}

/// Return the field behind a unique violation on a known constraint.
fn unique_violation(err: &sqlx::Error) -> Option<UniqueField> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }
    db_err.constraint().and_then(UniqueField::from_constraint)
}
