//! The explicit harness context (§9 REDESIGN FLAGS: "shared mutable
//! globals → explicit context").
//!
//! Bundles everything C2 (dispatcher), C4 (async worker) and C5 (emitter)
//! need to share: the output mutex, the backend, the async rendezvous
//! slot, the driver settings, and the running message-id counter. No
//! hidden globals — every thread that needs one of these gets an
//! `Arc<HarnessContext>`.

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use drv_audio::AudioConnection;
use drv_backend::{Backend, DriverSettings, Event, SynthesisSink};
use drv_proto::Reply;

use crate::emitter;
use crate::error::Result;
use crate::slot::AsyncSlot;

/// Shared state threaded through the dispatcher, the async worker, and the
/// event emitter.
pub struct HarnessContext {
    output: Mutex<Box<dyn Write + Send>>,
    backend: Arc<dyn Backend>,
    audio_conn: Mutex<Option<AudioConnection>>,
    settings: Mutex<Option<DriverSettings>>,
    async_slot: AsyncSlot,
    next_message_id: AtomicU32,
}

impl HarnessContext {
    pub fn new(output: Box<dyn Write + Send>, backend: Arc<dyn Backend>) -> Self {
        Self {
            output: Mutex::new(output),
            backend,
            audio_conn: Mutex::new(None),
            settings: Mutex::new(None),
            async_slot: AsyncSlot::new(),
            next_message_id: AtomicU32::new(1),
        }
    }

    pub fn async_slot(&self) -> &AsyncSlot {
        &self.async_slot
    }

    /// Seed the driver settings at startup, e.g. from CLI flags, without
    /// going through the `SET AUDIO RETRIEVAL DESTINATION` command.
    pub fn seed_settings(&self, settings: DriverSettings) {
        *self.settings.lock().unwrap() = Some(settings);
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn settings(&self) -> Option<DriverSettings> {
        self.settings.lock().unwrap().clone()
    }

    pub fn set_settings(&self, settings: DriverSettings) {
        *self.settings.lock().unwrap() = Some(settings);
    }

    /// Allocate the next outbound message id. Source wire-hardcodes `"1"`;
    /// this keeps that as the default first value while giving a future
    /// backend room to report distinct ids per utterance (SPEC_FULL §4).
    pub fn next_message_id(&self) -> u32 {
        self.next_message_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Write one reply to the command channel, taking the output mutex for
    /// exactly the duration of this write (Testable Property 1: reply
    /// atomicity is a per-write guarantee, not a per-command one — see
    /// `DESIGN.md` for why the whole dispatch is not held under this lock).
    pub fn write_reply(&self, reply: &Reply) -> Result<()> {
        let mut out = self.output.lock().unwrap();
        drv_proto::write_reply(&mut *out, reply)?;
        Ok(())
    }
}

/// [`SynthesisSink`] implementation handed to backends during a `say_*`
/// call. Borrows the context for the duration of the call only.
pub struct HarnessSink<'a> {
    ctx: &'a HarnessContext,
}

impl<'a> HarnessSink<'a> {
    pub fn new(ctx: &'a HarnessContext) -> Self {
        Self { ctx }
    }
}

impl SynthesisSink for HarnessSink<'_> {
    fn emit_event(&self, event: Event) {
        if let Err(err) = emitter::emit_event(self.ctx, event) {
            tracing::error!(%err, "dropping malformed event from backend");
        }
    }

    fn send_audio(&self, block: &drv_backend::AudioBlock) -> std::io::Result<()> {
        let mut conn = self.ctx.audio_conn.lock().unwrap();
        if conn.is_none() {
            let settings = self.ctx.settings().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "no audio retrieval destination configured",
                )
            })?;
            *conn = Some(
                drv_audio::connect(&settings.audio_retrieval_host, settings.audio_retrieval_port)
                    .map_err(|err| std::io::Error::other(err.to_string()))?,
            );
        }
        conn.as_mut().unwrap().send_block(block).map_err(|err| {
            tracing::warn!(%err, "audio socket write failed");
            std::io::Error::other(err.to_string())
        })
    }
}
