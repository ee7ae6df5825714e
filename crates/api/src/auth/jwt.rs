//! Session token generation and validation.
//!
//! Session tokens are HS256-signed JWTs carrying a [`Claims`] payload. They
//! are never stored server-side: a token is valid exactly when its signature
//! checks out and it has not expired.

use bookshelf_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{parse_or, required, ConfigError};

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The account's internal database id.
    pub id: DbId,
    /// The account's role priority (1-5).
    pub role: i16,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier, for audit logs.
    pub jti: String,
}

/// Signing secret and token lifetime.
///
/// Built once at startup and handed to whoever issues or checks tokens;
/// nothing reads the secret from the environment after that.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in days (default: 14).
    pub expiry_days: i64,
}

/// Default token lifetime in days.
pub const DEFAULT_EXPIRY_DAYS: i64 = 14;

/// Longest token lifetime accepted from configuration.
pub const MAX_EXPIRY_DAYS: i64 = 3650;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_days: DEFAULT_EXPIRY_DAYS,
        }
    }

    /// Load token configuration through a key lookup.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JSON_WEB_TOKEN`  | **yes**  | --      |
    /// | `JWT_EXPIRY_DAYS` | no       | `14`    |
    ///
    /// The lifetime must lie in `1..=MAX_EXPIRY_DAYS`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(lookup, "JSON_WEB_TOKEN")?;
        let expiry_days = parse_or(lookup, "JWT_EXPIRY_DAYS", DEFAULT_EXPIRY_DAYS, "i64")?;
        if !(1..=MAX_EXPIRY_DAYS).contains(&expiry_days) {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRY_DAYS",
                expected: "day count between 1 and 3650",
                value: expiry_days.to_string(),
            });
        }
        Ok(Self {
            secret,
            expiry_days,
        })
    }
}

/// Generate a signed session token for the given account.
pub fn generate_access_token(
    account_id: DbId,
    role: i16,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now.saturating_add(config.expiry_days.saturating_mul(SECONDS_PER_DAY));

    let claims = Claims {
        id: account_id,
        role,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Checks the signature and the expiration claim.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
