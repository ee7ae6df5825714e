//! Account entity model and DTOs.

use bookshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `accounts` table. Holds no secret material, so it is
/// safe to serialize.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: i16,
    pub created_at: Timestamp,
}

/// DTO for creating a new account. `created_at` is set by the database.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: i16,
}
