//! TCP audio side-channel for the TTS driver harness.
//!
//! Owns the transport half of the Audio & Event Emitter (C5): connecting
//! to the downstream audio server and framing outgoing PCM blocks. The
//! command-channel half (emitting progress events under the output
//! mutex) lives in `drv-harness`, which needs the shared mutex this crate
//! doesn't know about.

mod connection;
mod error;

pub use connection::{connect, AudioConnection};
pub use error::{Error, Result};
