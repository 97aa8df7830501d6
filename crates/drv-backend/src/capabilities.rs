//! The driver capabilities vector and its wire encoder (C3).

/// A relative/absolute sub-capability pair, used for rate, pitch, pitch
/// range, and volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSupport {
    pub relative: bool,
    pub absolute: bool,
}

/// Which punctuation modes the backend can honor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunctuationModes {
    pub all: bool,
    pub none: bool,
    pub some: bool,
}

/// Which capital-letters announcement modes the backend can honor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapitalLettersModes {
    pub spelling: bool,
    pub icon: bool,
    pub pitch: bool,
}

/// Which audio delivery methods the backend supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioMethods {
    pub retrieval: bool,
    pub playback: bool,
}

/// Which progress-event granularities the backend can report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSupport {
    pub message: bool,
    pub sentences: bool,
    pub words: bool,
    pub index_mark: bool,
}

/// Which message content formats the backend understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFormats {
    pub ssml: bool,
    pub plain: bool,
}

/// Tri-state performance guideline compliance.
///
/// The original C source misspells the top tier `excelent`; this harness
/// uses the corrected spelling on the wire (spec §9 REDESIGN FLAGS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerformanceLevel {
    #[default]
    None,
    Good,
    Excellent,
}

/// The fixed capability vector a backend advertises.
///
/// [`DriverCapabilities::absent`] is used whenever a backend's
/// `driver_capabilities` trait method returns `None` (the key is missing
/// from its capability table): all booleans false, all mode-support/sets
/// empty, performance level `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverCapabilities {
    pub can_list_voices: bool,
    pub can_set_voice_by_properties: bool,
    pub can_get_current_voice: bool,

    pub rate_settings: ModeSupport,
    pub pitch_settings: ModeSupport,
    pub pitch_range_settings: ModeSupport,
    pub volume_settings: ModeSupport,

    pub capital_letters_modes: CapitalLettersModes,

    pub can_get_default_rate: bool,
    pub can_get_default_pitch: bool,
    pub can_get_default_volume: bool,
    pub can_get_default_pitch_range: bool,

    pub punctuation_modes: PunctuationModes,
    pub can_set_punctuation_detail: bool,
    pub can_set_number_grouping: bool,

    pub can_say_text_from_position: bool,
    pub can_say_key: bool,
    pub can_say_char: bool,
    pub can_say_icon: bool,

    pub can_set_dictionary: bool,

    pub audio_methods: AudioMethods,
    pub events: EventSupport,
    pub performance_level: PerformanceLevel,
    pub message_format: MessageFormats,

    pub can_defer_message: bool,
    pub supports_multilingual_utterances: bool,
}

impl DriverCapabilities {
    /// The vector used when a backend does not implement
    /// `driver_capabilities` at all.
    pub fn absent() -> Self {
        Self::default()
    }
}

fn bool_line(name: &str, value: bool) -> String {
    format!("{name} {}", if value { "true" } else { "false" })
}

fn subset_line(name: &str, members: &[(&str, bool)]) -> String {
    let present: Vec<&str> = members
        .iter()
        .filter(|(_, on)| *on)
        .map(|(label, _)| *label)
        .collect();
    if present.is_empty() {
        format!("{name} none")
    } else {
        format!("{name} {}", present.join(" "))
    }
}

fn performance_level_line(level: PerformanceLevel) -> String {
    let label = match level {
        PerformanceLevel::None => "none",
        PerformanceLevel::Good => "good",
        PerformanceLevel::Excellent => "excellent",
    };
    format!("performance_level {label}")
}

/// Encode a capability vector into the `data` lines of a `DRIVER
/// CAPABILITIES` reply, in the fixed ordering of spec §4.3.
pub fn encode(caps: &DriverCapabilities) -> Vec<String> {
    vec![
        bool_line("can_list_voices", caps.can_list_voices),
        bool_line(
            "can_set_voice_by_properties",
            caps.can_set_voice_by_properties,
        ),
        bool_line("can_get_current_voice", caps.can_get_current_voice),
        subset_line(
            "rate_settings",
            &[
                ("relative", caps.rate_settings.relative),
                ("absolute", caps.rate_settings.absolute),
            ],
        ),
        subset_line(
            "pitch_settings",
            &[
                ("relative", caps.pitch_settings.relative),
                ("absolute", caps.pitch_settings.absolute),
            ],
        ),
        subset_line(
            "pitch_range_settings",
            &[
                ("relative", caps.pitch_range_settings.relative),
                ("absolute", caps.pitch_range_settings.absolute),
            ],
        ),
        subset_line(
            "volume_settings",
            &[
                ("relative", caps.volume_settings.relative),
                ("absolute", caps.volume_settings.absolute),
            ],
        ),
        subset_line(
            "capital_letters_modes",
            &[
                ("spelling", caps.capital_letters_modes.spelling),
                ("icon", caps.capital_letters_modes.icon),
                ("pitch", caps.capital_letters_modes.pitch),
            ],
        ),
        bool_line("can_get_default_rate", caps.can_get_default_rate),
        bool_line("can_get_default_pitch", caps.can_get_default_pitch),
        bool_line("can_get_default_volume", caps.can_get_default_volume),
        bool_line(
            "can_get_default_pitch_range",
            caps.can_get_default_pitch_range,
        ),
        subset_line(
            "punctuation_modes",
            &[
                ("all", caps.punctuation_modes.all),
                ("none", caps.punctuation_modes.none),
                ("some", caps.punctuation_modes.some),
            ],
        ),
        bool_line(
            "can_set_punctuation_detail",
            caps.can_set_punctuation_detail,
        ),
        bool_line("can_set_number_grouping", caps.can_set_number_grouping),
        bool_line(
            "can_say_text_from_position",
            caps.can_say_text_from_position,
        ),
        bool_line("can_say_key", caps.can_say_key),
        bool_line("can_say_char", caps.can_say_char),
        bool_line("can_say_icon", caps.can_say_icon),
        bool_line("can_set_dictionary", caps.can_set_dictionary),
        subset_line(
            "audio_methods",
            &[
                ("retrieval", caps.audio_methods.retrieval),
                ("playback", caps.audio_methods.playback),
            ],
        ),
        subset_line(
            "events",
            &[
                ("message", caps.events.message),
                ("sentences", caps.events.sentences),
                ("words", caps.events.words),
                ("index_mark", caps.events.index_mark),
            ],
        ),
        performance_level_line(caps.performance_level),
        subset_line(
            "message_format",
            &[
                ("ssml", caps.message_format.ssml),
                ("plain", caps.message_format.plain),
            ],
        ),
        bool_line("can_defer_message", caps.can_defer_message),
        bool_line(
            "supports_multilingual_utterances",
            caps.supports_multilingual_utterances,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_false_vector_encodes_to_expected_lines() {
        // S2 in spec.md §8.
        let lines = encode(&DriverCapabilities::absent());
        assert_eq!(lines[0], "can_list_voices false");
        assert_eq!(lines[3], "rate_settings none");
        assert_eq!(lines[22], "performance_level none");
        assert_eq!(lines.len(), 26);
    }

    #[test]
    fn subset_line_preserves_fixed_sub_ordering() {
        let mut caps = DriverCapabilities::absent();
        caps.events.words = true;
        caps.events.message = true;
        let lines = encode(&caps);
        let events_line = lines.iter().find(|l| l.starts_with("events ")).unwrap();
        assert_eq!(events_line, "events message words");
    }

    #[test]
    fn excellent_is_spelled_correctly() {
        let mut caps = DriverCapabilities::absent();
        caps.performance_level = PerformanceLevel::Excellent;
        let lines = encode(&caps);
        assert_eq!(lines[22], "performance_level excellent");
    }

    proptest::proptest! {
        #[test]
        fn encoder_output_is_always_in_fixed_order_and_well_formed(
            can_list_voices in proptest::bool::ANY,
            rate_rel in proptest::bool::ANY,
            rate_abs in proptest::bool::ANY,
            events_idx_mark in proptest::bool::ANY,
            perf in 0u8..3,
        ) {
            let mut caps = DriverCapabilities::absent();
            caps.can_list_voices = can_list_voices;
            caps.rate_settings = ModeSupport { relative: rate_rel, absolute: rate_abs };
            caps.events.index_mark = events_idx_mark;
            caps.performance_level = match perf {
                0 => PerformanceLevel::None,
                1 => PerformanceLevel::Good,
                _ => PerformanceLevel::Excellent,
            };

            let lines = encode(&caps);
            // Testable Property 3: all 26 lines in the fixed order, §4.3.
            const EXPECTED_NAMES: [&str; 26] = [
                "can_list_voices", "can_set_voice_by_properties", "can_get_current_voice",
                "rate_settings", "pitch_settings", "pitch_range_settings", "volume_settings",
                "capital_letters_modes", "can_get_default_rate", "can_get_default_pitch",
                "can_get_default_volume", "can_get_default_pitch_range", "punctuation_modes",
                "can_set_punctuation_detail", "can_set_number_grouping",
                "can_say_text_from_position", "can_say_key", "can_say_char", "can_say_icon",
                "can_set_dictionary", "audio_methods", "events", "performance_level",
                "message_format", "can_defer_message", "supports_multilingual_utterances",
            ];
            prop_assert_eq!(lines.len(), 26);
            for (line, name) in lines.iter().zip(EXPECTED_NAMES.iter()) {
                prop_assert!(line.starts_with(name));
            }
            for line in &lines {
                let value = line.splitn(2, ' ').nth(1).unwrap();
                let is_bool = value == "true" || value == "false";
                let is_none = value == "none";
                let is_subset = !is_bool && !is_none && value.split(' ').count() >= 1;
                prop_assert!(is_bool || is_none || is_subset);
            }
        }
    }
}
