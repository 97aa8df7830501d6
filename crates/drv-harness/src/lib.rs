//! The command dispatcher (C2), async synthesis worker (C4), and the
//! command-channel half of the audio & event emitter (C5).
//!
//! This is the crate with the actual engineering weight: the explicit
//! [`HarnessContext`] (§9 REDESIGN FLAGS — no hidden globals), the
//! verb-table dispatcher, the single-slot rendezvous worker, and event
//! emission under the output mutex.

mod args;
mod context;
mod dispatch;
mod emitter;
mod error;
mod slot;
mod worker;

pub use context::{HarnessContext, HarnessSink};
pub use dispatch::{dispatch, Outcome};
pub use error::{Error, Result};
pub use slot::{AsyncSlot, AsyncVerb, WorkItem};
pub use worker::run as run_worker;
