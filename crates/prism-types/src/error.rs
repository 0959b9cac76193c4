//! Error types for the prism engine.
//!
//! All crates return `PrismResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the prism engine.
#[derive(Debug, Error)]
pub enum PrismError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A scene invariant was violated (e.g. body ids out of order).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, PrismError>`.
pub type PrismResult<T> = Result<T, PrismError>;
