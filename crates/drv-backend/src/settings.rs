//! Process-wide driver settings (§3 Driver Settings).

/// The audio retrieval destination, set once by `SET AUDIO RETRIEVAL
/// DESTINATION` and read by the audio connection code whenever it needs to
/// open the TCP side-channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    pub audio_retrieval_host: String,
    pub audio_retrieval_port: u16,
}
