use thiserror::Error;

/// Core error type shared across Identikit crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record violates the span-exactness invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Identikit crates.
pub type Result<T> = std::result::Result<T, Error>;
