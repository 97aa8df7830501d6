//! Asynchronous progress events (§3 Event, §4.5 event table).

use crate::error::{Error, Result};

/// A synthesis progress event raised by a backend while it is speaking a
/// message.
///
/// `None` is a legitimate backend signal meaning "nothing to report" and is
/// dropped silently by the emitter rather than written to the command
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MessageBegin {
        id: u32,
        text_pos: i32,
        audio_pos: i32,
    },
    MessageEnd {
        id: u32,
        text_pos: i32,
        audio_pos: i32,
    },
    SentenceBegin {
        id: u32,
        n: i32,
        text_pos: i32,
        audio_pos: i32,
    },
    SentenceEnd {
        id: u32,
        n: i32,
        text_pos: i32,
        audio_pos: i32,
    },
    WordBegin {
        id: u32,
        n: i32,
        text_pos: i32,
        audio_pos: i32,
    },
    WordEnd {
        id: u32,
        n: i32,
        text_pos: i32,
        audio_pos: i32,
    },
    IndexMark {
        id: u32,
        text_pos: i32,
        audio_pos: i32,
        name: String,
    },
    None,
}

impl Event {
    /// Build an `index_mark` event, enforcing the non-empty-name invariant
    /// at construction time (spec §3, §7: an empty name is a programming
    /// error, not a wire-level possibility).
    pub fn index_mark(
        id: u32,
        text_pos: i32,
        audio_pos: i32,
        name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyIndexMarkName);
        }
        Ok(Self::IndexMark {
            id,
            text_pos,
            audio_pos,
            name,
        })
    }

    /// The `(code, text, formatted data line)` this event maps to on the
    /// command channel, per spec §4.5. Returns `None` for [`Event::None`],
    /// which is dropped rather than emitted.
    pub fn wire_form(&self) -> Option<(u16, &'static str, String)> {
        match self {
            Event::MessageBegin {
                id,
                text_pos,
                audio_pos,
            } => Some((
                701,
                "MESSAGE EVENT",
                format!("message_start {id} {text_pos} {audio_pos}"),
            )),
            Event::MessageEnd {
                id,
                text_pos,
                audio_pos,
            } => Some((
                701,
                "MESSAGE EVENT",
                format!("message_end {id} {text_pos} {audio_pos}"),
            )),
            Event::SentenceBegin {
                id,
                n,
                text_pos,
                audio_pos,
            } => Some((
                701,
                "SENTENCE OR WORD EVENT",
                format!("sentence_start {id} {n} {text_pos} {audio_pos}"),
            )),
            Event::SentenceEnd {
                id,
                n,
                text_pos,
                audio_pos,
            } => Some((
                702,
                "SENTENCE OR WORD EVENT",
                format!("sentence_end {id} {n} {text_pos} {audio_pos}"),
            )),
            Event::WordBegin {
                id,
                n,
                text_pos,
                audio_pos,
            } => Some((
                702,
                "SENTENCE OR WORD EVENT",
                format!("word_start {id} {n} {text_pos} {audio_pos}"),
            )),
            Event::WordEnd {
                id,
                n,
                text_pos,
                audio_pos,
            } => Some((
                702,
                "SENTENCE OR WORD EVENT",
                format!("word_end {id} {n} {text_pos} {audio_pos}"),
            )),
            Event::IndexMark {
                id,
                text_pos,
                audio_pos,
                name,
            } => Some((
                702,
                "INDEX MARK EVENT",
                format!("index_mark {id} \"{name}\" {text_pos} {audio_pos}"),
            )),
            Event::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mark_rejects_empty_name() {
        assert_eq!(
            Event::index_mark(7, 12, 300, ""),
            Err(Error::EmptyIndexMarkName)
        );
    }

    #[test]
    fn index_mark_wire_form_matches_s6() {
        // S6 in spec.md §8.
        let event = Event::index_mark(7, 12, 300, "intro").unwrap();
        let (code, text, arg) = event.wire_form().unwrap();
        assert_eq!(code, 702);
        assert_eq!(text, "INDEX MARK EVENT");
        assert_eq!(arg, "index_mark 7 \"intro\" 12 300");
    }

    #[test]
    fn none_event_has_no_wire_form() {
        assert_eq!(Event::None.wire_form(), None);
    }
}
