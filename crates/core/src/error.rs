/// Domain-level errors shared by the `db` and `api` crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A client-supplied field broke a validation rule. The message is
    /// returned to the client verbatim.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
