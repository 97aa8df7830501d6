//! Single-slot async rendezvous (§5, §9 "do not reach for a general
//! unbounded channel").

use std::sync::{Condvar, Mutex};

use drv_backend::MsgFormat;

/// The asynchronous backend operation a [`WorkItem`] should be dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncVerb {
    SayTextAsynchro,
    SayKeyAsynchro,
    SayCharAsynchro,
    SayIconAsynchro,
}

/// A pending async synthesis request.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub verb: AsyncVerb,
    pub payload: Vec<u8>,
    /// Only meaningful for `SayTextAsynchro`; `say_key/char/icon` ignore it.
    pub format: MsgFormat,
}

/// Last-writer-wins handoff cell from the command thread to the async
/// worker thread.
///
/// A producer that finds the slot occupied overwrites it; the worker only
/// ever observes the most recent item (Testable Property 5).
#[derive(Default)]
pub struct AsyncSlot {
    slot: Mutex<Option<WorkItem>>,
    cond: Condvar,
}

impl AsyncSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new work item, waking the worker. Overwrites any item that
    /// hasn't been consumed yet.
    pub fn push(&self, item: WorkItem) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(item);
        self.cond.notify_one();
    }

    /// Block until a work item is available, then take and return it.
    pub fn wait_take(&self) -> WorkItem {
        let mut slot = self.slot.lock().unwrap();
        loop {
            if let Some(item) = slot.take() {
                return item;
            }
            slot = self.cond.wait(slot).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_take_round_trips() {
        let slot = AsyncSlot::new();
        slot.push(WorkItem {
            verb: AsyncVerb::SayKeyAsynchro,
            payload: b"a".to_vec(),
            format: MsgFormat::Plain,
        });
        let item = slot.wait_take();
        assert_eq!(item.verb, AsyncVerb::SayKeyAsynchro);
        assert_eq!(item.payload, b"a");
    }

    #[test]
    fn overwrite_before_consumption_drops_the_earlier_item() {
        let slot = AsyncSlot::new();
        slot.push(WorkItem {
            verb: AsyncVerb::SayCharAsynchro,
            payload: b"x".to_vec(),
            format: MsgFormat::Plain,
        });
        slot.push(WorkItem {
            verb: AsyncVerb::SayCharAsynchro,
            payload: b"y".to_vec(),
            format: MsgFormat::Plain,
        });
        let item = slot.wait_take();
        assert_eq!(item.payload, b"y");
    }
}
