//! Async synthesis worker (C4, spec §4.4, §5).
//!
//! Runs on its own OS thread, spawned once at startup with a handle to the
//! shared [`HarnessContext`]. Loops on the rendezvous slot: wait, snapshot,
//! dispatch, repeat. There is no graceful shutdown — the thread is detached
//! and the process exits out from under it on `QUIT`.

use std::sync::Arc;

use drv_backend::BackendError;

use crate::context::{HarnessContext, HarnessSink};
use crate::slot::{AsyncVerb, WorkItem};

/// Run the worker loop forever. Intended to be the body of a
/// `std::thread::spawn` closure.
pub fn run(ctx: Arc<HarnessContext>) -> ! {
    loop {
        let item = ctx.async_slot().wait_take();
        dispatch_one(&ctx, item);
    }
}

fn dispatch_one(ctx: &HarnessContext, item: WorkItem) {
    let sink = HarnessSink::new(ctx);
    tracing::debug!(verb = ?item.verb, "async worker dispatching");

    let result: Option<Result<(), BackendError>> = match item.verb {
        AsyncVerb::SayTextAsynchro => {
            ctx.backend()
                .say_text_asynchro(item.format, &item.payload, &sink)
        }
        AsyncVerb::SayKeyAsynchro => {
            let key = String::from_utf8_lossy(&item.payload);
            ctx.backend().say_key_asynchro(&key, &sink)
        }
        AsyncVerb::SayCharAsynchro => {
            let ch = String::from_utf8_lossy(&item.payload);
            ctx.backend().say_char_asynchro(&ch, &sink)
        }
        AsyncVerb::SayIconAsynchro => {
            let name = String::from_utf8_lossy(&item.payload);
            ctx.backend().say_icon_asynchro(&name, &sink)
        }
    };

    match result {
        Some(Ok(())) => tracing::debug!("async synthesis completed"),
        Some(Err(err)) => tracing::warn!(%err, "async synthesis failed"),
        None => tracing::warn!("async worker woke for an operation the backend doesn't implement"),
    }
}
