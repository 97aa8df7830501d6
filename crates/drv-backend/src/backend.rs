//! The backend capability trait (§3 Backend Capability Table, §6.2).
//!
//! Modeled as a typed trait with default-absent methods rather than the
//! source's name-keyed function-pointer hash table (§9 REDESIGN FLAGS):
//! a method returning `None` means the operation is not present in this
//! backend's capability table, exactly as a missing key would be in the
//! original. `Some(Err(_))` means the operation is present but failed at
//! runtime — the Rust equivalent of the C convention "0 = success,
//! non-zero = failure".

use crate::audio_block::AudioBlock;
use crate::capabilities::DriverCapabilities;
use crate::error::BackendResult;
use crate::event::Event;
use crate::types::{DriverDescription, MsgFormat, SettingMode, VoiceDescription};

/// Sink a backend uses to push synthesis progress back to the harness
/// while a `say_*`/`say_*_asynchro` call is in flight.
///
/// Implemented by the harness's event emitter + audio connection; passed
/// to the backend by reference so the trait stays object-safe and the
/// backend never has to know about the output mutex or the TCP socket
/// directly.
pub trait SynthesisSink: Send + Sync {
    /// Emit a progress event on the command channel.
    fn emit_event(&self, event: Event);

    /// Push one block of synthesized audio to the audio side-channel.
    fn send_audio(&self, block: &AudioBlock) -> std::io::Result<()>;
}

/// The pluggable synthesizer backend the harness dispatches commands to.
///
/// All methods default to `None` ("not implemented by this backend").
/// Implementors override only the operations they actually support; the
/// dispatcher in `drv-harness` is responsible for falling back from a
/// sync `say_*` to its `_asynchro` counterpart, and for mapping `None`/
/// `Some(Err(_))` to the reply codes in spec §4.2.
///
/// The `has_say_*_asynchro` probes exist because the `_asynchro` methods
/// themselves perform real synthesis work and must only run on the async
/// worker thread (C4); the dispatcher needs to know whether to hand a
/// work item off *before* anything backend-specific runs on the command
/// thread, so presence can't be discovered by calling the method itself.
pub trait Backend: Send + Sync {
    /// Initialize the backend. `Ok(status_info)` on success.
    fn init(&self) -> Option<BackendResult<String>> {
        None
    }

    fn list_drivers(&self) -> Option<BackendResult<DriverDescription>> {
        None
    }

    fn list_voices(&self) -> Option<BackendResult<Vec<VoiceDescription>>> {
        None
    }

    /// Absence means "all false / performance_level none" per spec §3;
    /// the harness substitutes [`DriverCapabilities::absent`] itself, so
    /// this method need not do so.
    fn driver_capabilities(&self) -> Option<DriverCapabilities> {
        None
    }

    fn say_text(
        &self,
        _format: MsgFormat,
        _payload: &[u8],
        _sink: &dyn SynthesisSink,
    ) -> Option<BackendResult<()>> {
        None
    }

    /// Whether `say_text_asynchro` is implemented, checked by the dispatcher
    /// *before* handing work to the async worker thread — a pure capability
    /// probe, unlike the method below which actually performs synthesis and
    /// must only ever be invoked from the worker thread (C4), never inline
    /// on the command thread.
    fn has_say_text_asynchro(&self) -> bool {
        false
    }

    fn say_text_asynchro(
        &self,
        _format: MsgFormat,
        _payload: &[u8],
        _sink: &dyn SynthesisSink,
    ) -> Option<BackendResult<()>> {
        None
    }

    fn say_key(&self, _key: &str, _sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        None
    }

    fn has_say_key_asynchro(&self) -> bool {
        false
    }

    fn say_key_asynchro(&self, _key: &str, _sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        None
    }

    fn say_char(&self, _ch: &str, _sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        None
    }

    fn has_say_char_asynchro(&self) -> bool {
        false
    }

    fn say_char_asynchro(&self, _ch: &str, _sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        None
    }

    fn say_icon(&self, _name: &str, _sink: &dyn SynthesisSink) -> Option<BackendResult<()>> {
        None
    }

    fn has_say_icon_asynchro(&self) -> bool {
        false
    }

    fn say_icon_asynchro(
        &self,
        _name: &str,
        _sink: &dyn SynthesisSink,
    ) -> Option<BackendResult<()>> {
        None
    }

    fn set_rate(&self, _mode: SettingMode, _value: i32) -> Option<BackendResult<()>> {
        None
    }

    fn set_pitch(&self, _mode: SettingMode, _value: i32) -> Option<BackendResult<()>> {
        None
    }

    fn set_pitch_range(&self, _mode: SettingMode, _value: i32) -> Option<BackendResult<()>> {
        None
    }

    fn set_volume(&self, _mode: SettingMode, _value: i32) -> Option<BackendResult<()>> {
        None
    }

    fn set_audio_retrieval_destination(
        &self,
        _host: &str,
        _port: u16,
    ) -> Option<BackendResult<()>> {
        None
    }

    fn cancel(&self) -> Option<BackendResult<()>> {
        None
    }

    /// Called on `QUIT` before the process exits. Infallible: the source
    /// treats `quit` as a void callback with no failure mode to report.
    fn quit(&self) {}
}
