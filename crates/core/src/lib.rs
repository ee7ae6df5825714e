//! Domain building blocks for the bookshelf account service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates layer persistence and transport on top of it.

pub mod credentials;
pub mod error;
pub mod hashing;
pub mod roles;
pub mod types;
pub mod validation;
