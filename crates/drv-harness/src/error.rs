use thiserror::Error;

/// Top-level error type for the harness crate.
///
/// Composes the lower crates' errors (`#[from]`) with dispatcher-specific
/// variants that have no natural home in `drv-proto`/`drv-backend`/`drv-audio`.
#[derive(Debug, Error)]
pub enum Error {
    /// The command channel itself failed (a read or write returned an I/O
    /// error). Per the error-handling policy, this is fatal: there is no
    /// channel left to report it on.
    #[error("command channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed reply was about to be constructed by the dispatcher
    /// itself (a programming error, not a protocol error from the peer).
    #[error("malformed reply: {0}")]
    Proto(#[from] drv_proto::Error),

    /// An event handed to the emitter violated an invariant (e.g. an empty
    /// index-mark name).
    #[error("malformed event: {0}")]
    Backend(#[from] drv_backend::Error),

    /// Opening or writing to the audio side-channel failed.
    #[error("audio channel error: {0}")]
    Audio(#[from] drv_audio::Error),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
