//! A deterministic [`Backend`] used to exercise `drv-harness` and `drv-cli`
//! without a real synthesizer.
//!
//! Deliberately asymmetric in how it implements `say_*`: `say_text` is
//! synchronous, while `say_key`/`say_char`/`say_icon` only have `_asynchro`
//! counterparts. This is the one backend in the workspace that exercises
//! both halves of the dispatcher's "prefer sync, else hand off to the
//! async worker" rule (spec §4.2) in the same process.

use std::sync::Mutex;

use drv_backend::{
    AudioBlock, Backend, BackendResult, DataFormat, DriverCapabilities, DriverDescription,
    Endianness, EncodingSign, Event, MsgFormat, SettingMode, SynthesisSink, VoiceDescription,
    VoiceGender,
};

#[derive(Debug, Clone, Copy)]
struct VoiceParam {
    value: i32,
}

impl Default for VoiceParam {
    fn default() -> Self {
        Self { value: 100 }
    }
}

struct MockState {
    rate: VoiceParam,
    pitch: VoiceParam,
    pitch_range: VoiceParam,
    volume: VoiceParam,
    next_message_id: u32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            rate: VoiceParam::default(),
            pitch: VoiceParam::default(),
            pitch_range: VoiceParam::default(),
            volume: VoiceParam::default(),
            next_message_id: 1,
        }
    }
}

/// A small, deterministic backend. Every `say_*` family emits
/// `message_begin`/`message_end` around a single fabricated audio block
/// whose length tracks the input size, so tests can assert on something
/// other than a magic constant.
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
        }
    }

    fn synthesize(&self, text_len: usize, sink: &dyn SynthesisSink) {
        let id = {
            let mut state = self.state.lock().unwrap();
            let id = state.next_message_id;
            state.next_message_id += 1;
            id
        };

        sink.emit_event(Event::MessageBegin {
            id,
            text_pos: 0,
            audio_pos: 0,
        });

        let block = AudioBlock {
            msg_id: id,
            number: 0,
            data_format: DataFormat::Raw,
            audio_length: text_len as u64,
            sample_rate: 22050,
            channels: 1,
            encoding_sign: EncodingSign::Signed,
            encoding_bpw: 16,
            encoding_endian: Endianness::Little,
            events: Vec::new(),
            data: vec![0u8; text_len.max(1) * 2],
        };
        if let Err(err) = sink.send_audio(&block) {
            tracing::warn!(%err, "mock backend failed to push audio block");
        }

        sink.emit_event(Event::MessageEnd {
            id,
            text_pos: text_len as i32,
            audio_pos: block.audio_length as i32,
        });
    }
}

impl Backend for MockBackend {
    fn init(&self) -> Option<BackendResult<String>> {
        Some(Ok("mock backend ready".to_string()))
    }

    fn list_drivers(&self) -> Option<BackendResult<DriverDescription>> {
        Some(Ok(DriverDescription {
            driver_id: "mock".to_string(),
            driver_version: "0.1".to_string(),
            synthesizer_name: "mock-synth".to_string(),
            synthesizer_version: "0.1".to_string(),
        }))
    }

    fn list_voices(&self) -> Option<BackendResult<Vec<VoiceDescription>>> {
        Some(Ok(vec![VoiceDescription {
            name: "mock-voice".to_string(),
            language: "en".to_string(),
            dialect: "US".to_string(),
            gender: VoiceGender::None,
            age: 0,
        }]))
    }

    fn driver_capabilities(&self) -> Option<DriverCapabilities> {
        let mut caps = DriverCapabilities::absent();
        caps.can_list_voices = true;
        caps.rate_settings.absolute = true;
        caps.rate_settings.relative = true;
        caps.pitch_settings.absolute = true;
        caps.volume_settings.absolute = true;
        caps.can_say_key = true;
        caps.can_say_char = true;
        caps.can_say_icon = true;
        caps.audio_methods.retrieval = true;
        caps.events.message = true;
        caps.events.index_mark = true;
        caps.message_format.plain = true;
        caps
    }

    fn say_text(
        &self,
        _format: MsgFormat,
        payload: &[u8],
        sink: &dyn SynthesisSink,
    ) -> Option<BackendResult<()>> {
        self.synthesize(payload.len(), sink);
        Some(Ok(()))
    }

    fn has_say_key_asynchro(&self) -> bool {
        true
    }

    fn say_key_asynchro(&self, key: &str, sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        self.synthesize(key.len(), sink);
        Some(Ok(()))
    }

    fn has_say_char_asynchro(&self) -> bool {
        true
    }

    fn say_char_asynchro(&self, ch: &str, sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        self.synthesize(ch.len(), sink);
        Some(Ok(()))
    }

    fn has_say_icon_asynchro(&self) -> bool {
        true
    }

    fn say_icon_asynchro(
        &self,
        name: &str,
        sink: &dyn SynthesisSink,
    ) -> Option<BackendResult<()>> {
        self.synthesize(name.len(), sink);
        Some(Ok(()))
    }

    fn set_rate(&self, mode: SettingMode, value: i32) -> Option<BackendResult<()>> {
        self.state.lock().unwrap().rate = apply(mode, value);
        Some(Ok(()))
    }

    fn set_pitch(&self, mode: SettingMode, value: i32) -> Option<BackendResult<()>> {
        self.state.lock().unwrap().pitch = apply(mode, value);
        Some(Ok(()))
    }

    fn set_pitch_range(&self, mode: SettingMode, value: i32) -> Option<BackendResult<()>> {
        self.state.lock().unwrap().pitch_range = apply(mode, value);
        Some(Ok(()))
    }

    fn set_volume(&self, mode: SettingMode, value: i32) -> Option<BackendResult<()>> {
        self.state.lock().unwrap().volume = apply(mode, value);
        Some(Ok(()))
    }

    fn set_audio_retrieval_destination(&self, host: &str, port: u16) -> Option<BackendResult<()>> {
        tracing::debug!(host, port, "mock backend noted audio retrieval destination");
        Some(Ok(()))
    }

    fn cancel(&self) -> Option<BackendResult<()>> {
        Some(Ok(()))
    }

    fn quit(&self) {
        tracing::info!("mock backend shutting down");
    }
}

fn apply(_mode: SettingMode, value: i32) -> VoiceParam {
    VoiceParam { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl SynthesisSink for RecordingSink {
        fn emit_event(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }

        fn send_audio(&self, _block: &AudioBlock) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn say_text_brackets_with_message_begin_and_end() {
        let backend = MockBackend::new();
        let sink = RecordingSink::new();
        backend
            .say_text(MsgFormat::Plain, b"hello", &sink)
            .unwrap()
            .unwrap();
        let events = sink.events.lock().unwrap();
        assert!(matches!(events[0], Event::MessageBegin { .. }));
        assert!(matches!(events[1], Event::MessageEnd { .. }));
    }

    #[test]
    fn say_key_has_no_sync_variant_but_advertises_async() {
        let backend = MockBackend::new();
        let sink = RecordingSink::new();
        assert!(backend.say_key("a", &sink).is_none());
        assert!(backend.has_say_key_asynchro());
        backend.say_key_asynchro("a", &sink).unwrap().unwrap();
        assert_eq!(sink.events.lock().unwrap().len(), 2);
    }
}
