//! Event emission on the command channel (§4.5, the command-channel half of
//! C5). The TCP half lives in `drv-audio`.

use drv_backend::Event;
use drv_proto::Reply;

use crate::context::HarnessContext;
use crate::error::Result;

/// Format and write one progress event as a single reply under the output
/// mutex (table in §4.5). `Event::None` is dropped silently.
pub fn emit_event(ctx: &HarnessContext, event: Event) -> Result<()> {
    let Some((code, text, arg)) = event.wire_form() else {
        return Ok(());
    };
    let reply = Reply::with_data(code, text, vec![arg])?;
    ctx.write_reply(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drv_backend::Backend;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    struct NoopBackend;
    impl Backend for NoopBackend {}

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn index_mark_produces_the_s6_wire_form() {
        let buf = SharedBuf::default();
        let ctx = HarnessContext::new(Box::new(buf.clone()), Arc::new(NoopBackend));
        let event = Event::IndexMark {
            id: 7,
            text_pos: 12,
            audio_pos: 300,
            name: "intro".to_string(),
        };
        emit_event(&ctx, event).unwrap();
        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            written,
            "702-index_mark 7 \"intro\" 12 300\r\n702 INDEX MARK EVENT\r\n"
        );
    }

    #[test]
    fn none_event_writes_nothing() {
        let buf = SharedBuf::default();
        let ctx = HarnessContext::new(Box::new(buf.clone()), Arc::new(NoopBackend));
        emit_event(&ctx, Event::None).unwrap();
        assert!(buf.0.lock().unwrap().is_empty());
    }
}
