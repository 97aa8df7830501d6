//! Line-oriented request/reply protocol codec for the TTS driver harness.
//!
//! This crate is the harness's Protocol Codec: it knows how to tokenize a
//! command line, read a `SAY TEXT` data section, and serialize a
//! [`Reply`] to its wire form. It does not know what any verb *means* —
//! that's the dispatcher, one layer up — and it does not lock anything;
//! callers that share a single output stream across threads are
//! responsible for serializing their own writes.

mod codec;
mod error;
mod reply;

pub use codec::{read_command, read_data_section, write_reply};
pub use error::{Error, Result};
pub use reply::Reply;
