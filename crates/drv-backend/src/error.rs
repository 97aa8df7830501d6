use thiserror::Error;

/// Errors a backend operation can report.
///
/// A `Backend` trait method returns `Option<Result<T, BackendError>>`:
/// `None` means the operation is absent from this backend's capability
/// table (the Rust equivalent of a missing key in the C function-pointer
/// dictionary); `Some(Err(_))` means the operation is present but the
/// backend itself reported failure (the C convention of a non-zero return).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend reported a generic failure with no further detail.
    #[error("backend operation failed")]
    Failed,

    /// The backend reported a failure with a human-readable reason.
    #[error("backend operation failed: {0}")]
    FailedWithReason(String),
}

/// Result type for fallible backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Programming-error-class failures detected while building protocol data
/// model values (e.g. an `index_mark` event with an empty name). Per
/// spec §7 these indicate a bug in the backend, not a transient failure;
/// the harness logs and drops the offending event rather than propagating
/// it as a driver error reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An `index_mark` event was constructed with an empty name.
    #[error("index_mark event requires a non-empty name")]
    EmptyIndexMarkName,
}

/// Convenience result type for this crate's own fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;
