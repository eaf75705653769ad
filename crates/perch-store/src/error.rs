use thiserror::Error;

/// Errors a store operation can report. All are local, synchronous
/// outcomes of a single critical section: an operation either fully
/// succeeds or leaves no visible change, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Malformed or conflicting input, e.g. a duplicate username.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced post, user, or reply target does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Key/ownership check failed.
    #[error("{0}")]
    Forbidden(String),
}
