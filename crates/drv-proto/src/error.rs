use thiserror::Error;

/// Errors produced while constructing or writing protocol values.
///
/// These are distinct from [`std::io::Error`]: they signal that a caller
/// tried to build a [`crate::Reply`](crate::reply::Reply) that would
/// violate the wire invariants in the protocol (no embedded line
/// terminators, non-empty status text), not that the underlying transport
/// failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Reply or data-line text contained a bare `\r` or `\n`.
    #[error("reply text must not contain a line terminator: {0:?}")]
    EmbeddedNewline(String),

    /// Reply text was empty; the protocol requires a non-empty status text.
    #[error("reply text must be non-empty")]
    EmptyText,

    /// Underlying I/O failure while reading or writing the command channel.
    #[error("I/O error on command channel: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
