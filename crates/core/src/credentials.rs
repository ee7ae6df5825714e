//! Salted password hashing and verification.
//!
//! A credential is a `(salt, salted_hash)` pair. The salt is random bytes
//! rendered as lowercase hex; the salted hash is the SHA-256 hex digest of the
//! password bytes followed by the salt text. Both are stored, the password
//! never is.

use rand::RngCore;

use crate::hashing::{hex_encode, sha256_hex};

/// Salt length in bytes used for every stored credential.
pub const SALT_LENGTH: usize = 32;

/// A freshly derived credential, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedCredential {
    pub salt: String,
    pub salted_hash: String,
}

impl SaltedCredential {
    /// Derive a credential for `password` with a new random salt.
    pub fn derive(password: &str) -> Self {
        let salt = generate_salt(SALT_LENGTH);
        let salted_hash = generate_hash(password, &salt);
        Self { salt, salted_hash }
    }

    /// Whether `candidate` is the password this credential was derived from.
    pub fn verify(&self, candidate: &str) -> bool {
        verify_password(candidate, &self.salt, &self.salted_hash)
    }
}

/// Generate `length` cryptographically random bytes, hex-encoded.
///
/// The returned string is `2 * length` characters long. The thread-local
/// generator is a CSPRNG seeded from the operating system.
pub fn generate_salt(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    rand::rng().fill_bytes(&mut bytes);
    hex_encode(bytes)
}

/// Hash `password` together with `salt`.
///
/// Deterministic for a given pair. An empty salt is accepted and yields a
/// plain SHA-256 of the password; it is only used for demonstration.
pub fn generate_hash(password: &str, salt: &str) -> String {
    let mut input = Vec::with_capacity(password.len() + salt.len());
    input.extend_from_slice(password.as_bytes());
    input.extend_from_slice(salt.as_bytes());
    sha256_hex(&input)
}

/// Check `candidate` against a stored salt and digest.
///
/// The digests are compared in constant time.
pub fn verify_password(candidate: &str, salt: &str, stored_hash: &str) -> bool {
    let computed = generate_hash(candidate, salt);
    constant_time_eq(computed.as_bytes(), stored_hash.as_bytes())
}

/// Compare two byte slices without short-circuiting on the first mismatch.
///
/// Only the length check is allowed to return early; lengths are not secret.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
