use std::fmt;

/// Errors from the link and notice stores.
#[derive(Debug)]
pub enum StoreError {
    /// A required field was missing or empty.
    Validation(String),
    /// No record with the given id exists.
    NotFound(String),
    /// The backing file could not be written.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            StoreError::NotFound(what) => write!(f, "Not found: {}", what),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
