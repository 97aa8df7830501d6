//! Pure argument-parsing helpers for the command dispatcher (§4.2
//! "Argument parsing rules").

use drv_backend::{MsgFormat, SettingMode};
use thiserror::Error;

/// An argument failed to parse. Carries no reply code: callers decide
/// whether a given parse failure is a 300 (driver-facing) or 400
/// (protocol-facing) error, since §4.2 maps the same kind of failure to
/// different codes depending on which verb is being parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing argument")]
    Missing,
    #[error("invalid argument: {0}")]
    Invalid(String),
}

/// Parse a mode atom (`"absolute"` / `"relative"`).
pub fn parse_mode(atom: &str) -> Result<SettingMode, ArgError> {
    SettingMode::parse(atom).ok_or_else(|| ArgError::Invalid(atom.to_string()))
}

/// Parse a signed decimal integer value, as used by `SET … RATE|PITCH|…`.
pub fn parse_value(atom: &str) -> Result<i32, ArgError> {
    atom.parse::<i32>()
        .map_err(|_| ArgError::Invalid(atom.to_string()))
}

/// Parse a `SAY TEXT` format atom (`"plain"` / `"ssml"`).
pub fn parse_format(atom: &str) -> Result<MsgFormat, ArgError> {
    MsgFormat::parse(atom).ok_or_else(|| ArgError::Invalid(atom.to_string()))
}

/// Parse a TCP port atom, as used by `SET AUDIO RETRIEVAL <host> <port>`.
pub fn parse_port(atom: &str) -> Result<u16, ArgError> {
    atom.parse::<u16>()
        .map_err(|_| ArgError::Invalid(atom.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_accepts_absolute_and_relative() {
        assert_eq!(parse_mode("absolute"), Ok(SettingMode::Absolute));
        assert_eq!(parse_mode("relative"), Ok(SettingMode::Relative));
    }

    #[test]
    fn mode_rejects_anything_else() {
        assert!(parse_mode("wobbly").is_err());
    }

    #[test]
    fn value_accepts_signed_decimal() {
        assert_eq!(parse_value("42"), Ok(42));
        assert_eq!(parse_value("-5"), Ok(-5));
    }

    #[test]
    fn value_rejects_out_of_range_or_empty() {
        assert!(parse_value("").is_err());
        assert!(parse_value("99999999999999999999").is_err());
    }

    #[test]
    fn format_accepts_plain_and_ssml() {
        assert_eq!(parse_format("plain"), Ok(MsgFormat::Plain));
        assert_eq!(parse_format("ssml"), Ok(MsgFormat::Ssml));
    }

    #[test]
    fn format_rejects_unknown() {
        assert!(parse_format("ogg").is_err());
    }
}
