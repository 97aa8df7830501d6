//! Small enums shared by the capability vector, the dispatcher, and the
//! backend trait.

/// `absolute`/`relative` setting mode for rate, pitch, pitch range, and
/// volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingMode {
    Absolute,
    Relative,
}

impl SettingMode {
    /// Parse the `"absolute"`/`"relative"` wire atom.
    ///
    /// Anything else is a protocol-level argument error (spec §4.2).
    pub fn parse(atom: &str) -> Option<Self> {
        match atom {
            "absolute" => Some(Self::Absolute),
            "relative" => Some(Self::Relative),
            _ => None,
        }
    }
}

/// `plain`/`ssml` message content format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgFormat {
    Plain,
    Ssml,
}

impl MsgFormat {
    /// Parse the `"plain"`/`"ssml"` wire atom.
    pub fn parse(atom: &str) -> Option<Self> {
        match atom {
            "plain" => Some(Self::Plain),
            "ssml" => Some(Self::Ssml),
            _ => None,
        }
    }
}

/// Voice gender, as reported by `list_voices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceGender {
    None,
    Male,
    Female,
}

/// One entry of `list_voices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescription {
    pub name: String,
    pub language: String,
    pub dialect: String,
    pub gender: VoiceGender,
    pub age: u32,
}

/// The result of `list_drivers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDescription {
    pub driver_id: String,
    pub driver_version: String,
    pub synthesizer_name: String,
    pub synthesizer_version: String,
}
