use thiserror::Error;

/// Errors from the audio side-channel.
#[derive(Debug, Error)]
pub enum Error {
    /// Could not establish (or re-establish) the TCP connection to the
    /// audio server.
    #[error("could not connect to audio server {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Writing a framed block to an established connection failed.
    #[error("audio socket write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
