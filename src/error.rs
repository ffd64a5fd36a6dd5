use thiserror::Error;

/// Errors surfaced by the persistence facade. A failed login is a normal
/// negative result and never appears here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    /// One or more input fields failed validation; carries the field names.
    #[error("invalid field(s): {0:?}")]
    Validation(Vec<String>),

    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    /// Durable-store read/write failure. The in-memory collections are left
    /// unchanged, so the caller may retry the same operation.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl From<libsql::Error> for StoreError {
    fn from(e: libsql::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}
