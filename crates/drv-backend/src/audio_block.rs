//! The audio block data model (§3 Audio Block).
//!
//! This is the value shape only; the wire framing and TCP transport live
//! in `drv-audio`, which depends on this crate for the type.

use super::Event;

/// PCM container format of an audio block's data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Raw,
    Wav,
    Ogg,
}

impl DataFormat {
    pub fn as_wire(&self) -> &'static str {
        match self {
            DataFormat::Raw => "raw",
            DataFormat::Wav => "wav",
            DataFormat::Ogg => "ogg",
        }
    }
}

/// Sample encoding sign, derived from `encoding_sign > 0` in the source
/// model (§4.5: `s` if positive, else `u`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSign {
    Signed,
    Unsigned,
}

/// Byte order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Endianness::Little => "LE",
            Endianness::Big => "BE",
        }
    }
}

/// One block of synthesized audio, owned by the producer (the backend)
/// for the duration of a single `send_block` call.
#[derive(Debug, Clone)]
pub struct AudioBlock {
    pub msg_id: u32,
    pub number: u32,
    pub data_format: DataFormat,
    pub audio_length: u64,
    pub sample_rate: u32,
    pub channels: u16,
    pub encoding_sign: EncodingSign,
    pub encoding_bpw: u16,
    pub encoding_endian: Endianness,
    pub events: Vec<Event>,
    pub data: Vec<u8>,
}

impl AudioBlock {
    /// Byte length of `data`, i.e. the `data_length` wire field.
    pub fn data_length(&self) -> usize {
        self.data.len()
    }

    /// The `{s|u}<bpw><LE|BE>` encoding token, e.g. `s16LE`.
    pub fn encoding_token(&self) -> String {
        let sign = match self.encoding_sign {
            EncodingSign::Signed => 's',
            EncodingSign::Unsigned => 'u',
        };
        format!("{sign}{}{}", self.encoding_bpw, self.encoding_endian.as_wire())
    }
}
