//! Backend capability trait, capability-vector encoder, and progress
//! events for the TTS driver harness.
//!
//! This crate holds the parts of the harness that describe *what a
//! synthesizer backend can do* and *what it reports while doing it* —
//! the Capability Encoder (C3) and the data model the Command Dispatcher
//! (C2) and Audio & Event Emitter (C5) build on. It has no knowledge of
//! stdio, TCP, or threads.

mod audio_block;
mod backend;
mod capabilities;
mod error;
mod event;
mod settings;
mod types;

pub use audio_block::{AudioBlock, DataFormat, Endianness, EncodingSign};
pub use backend::{Backend, SynthesisSink};
pub use capabilities::{
    encode as encode_capabilities, AudioMethods, CapitalLettersModes, DriverCapabilities,
    EventSupport, MessageFormats, ModeSupport, PerformanceLevel, PunctuationModes,
};
pub use error::{BackendError, BackendResult, Error, Result};
pub use event::Event;
pub use settings::DriverSettings;
pub use types::{DriverDescription, MsgFormat, SettingMode, VoiceDescription, VoiceGender};
