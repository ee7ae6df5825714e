//! Session token primitives.
//!
//! - [`jwt`] -- HS256 session token issuance and validation.
//!
//! Password hashing lives in `bookshelf_core::credentials`.

pub mod jwt;
