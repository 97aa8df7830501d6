//! Reading commands and writing replies on the command channel.
//!
//! Kept generic over [`std::io::BufRead`]/[`std::io::Write`] rather than
//! tied to `Stdin`/`Stdout`, so tests can drive it with an in-memory
//! `Cursor` the same way `sonido_io::read_wav` is tested without a real
//! file.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Read one command line and split it into whitespace-separated atoms.
///
/// Returns `Ok(None)` on end-of-stream (the caller's command loop should
/// terminate cleanly). An empty line (after trimming) yields `Ok(Some(vec![]))`,
/// distinct from EOF.
pub fn read_command(reader: &mut impl BufRead) -> io::Result<Option<Vec<String>>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    let atoms: Vec<String> = line
        .trim_matches(|c: char| c == '\r' || c == '\n' || c.is_ascii_whitespace())
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    tracing::trace!(atom_count = atoms.len(), "read command line");
    Ok(Some(atoms))
}

/// Read the data section of a `SAY TEXT` command: lines up to (but not
/// including) a line whose trimmed content is `"."`.
///
/// The returned payload is the concatenation of every earlier line **with
/// its original line terminator preserved** — the framing is
/// binary-transparent about everything except the sentinel line itself.
pub fn read_data_section(reader: &mut impl BufRead) -> io::Result<Vec<u8>> {
    let mut payload = Vec::new();
    loop {
        let mut raw = Vec::new();
        let n = reader.read_until(b'\n', &mut raw)?;
        if n == 0 {
            // End of stream mid-data-section: treat as an implicit terminator.
            break;
        }
        let trimmed = std::str::from_utf8(&raw)
            .unwrap_or("")
            .trim_matches(|c: char| c == '\r' || c == '\n' || c.is_ascii_whitespace());
        if trimmed == "." {
            break;
        }
        payload.extend_from_slice(&raw);
    }
    tracing::trace!(bytes = payload.len(), "read data section");
    Ok(payload)
}

/// Write the multi-line wire form of a reply and flush the stream.
///
/// Each `data` line is written as `"<code>-<string>\r\n"`; the terminal
/// line is `"<code> <text>\r\n"`.
pub fn write_reply(writer: &mut impl Write, reply: &crate::Reply) -> Result<()> {
    for line in reply.data() {
        write!(writer, "{}-{}\r\n", reply.code(), line)?;
    }
    write!(writer, "{} {}\r\n", reply.code(), reply.text())?;
    writer.flush()?;
    tracing::trace!(code = reply.code(), "wrote reply");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reply;
    use std::io::Cursor;

    #[test]
    fn read_command_splits_on_space() {
        let mut cur = Cursor::new(b"SET foo RATE absolute 42\r\n".to_vec());
        let atoms = read_command(&mut cur).unwrap().unwrap();
        assert_eq!(atoms, vec!["SET", "foo", "RATE", "absolute", "42"]);
    }

    #[test]
    fn read_command_empty_line_is_not_eof() {
        let mut cur = Cursor::new(b"\r\n".to_vec());
        let atoms = read_command(&mut cur).unwrap();
        assert_eq!(atoms, Some(vec![]));
    }

    #[test]
    fn read_command_eof_is_none() {
        let mut cur = Cursor::new(Vec::new());
        assert_eq!(read_command(&mut cur).unwrap(), None);
    }

    #[test]
    fn read_data_section_preserves_terminators_and_excludes_dot() {
        let mut cur = Cursor::new(b"hello\r\nworld\r\n.\r\n".to_vec());
        let payload = read_data_section(&mut cur).unwrap();
        assert_eq!(payload, b"hello\r\nworld\r\n");
    }

    #[test]
    fn read_data_section_accepts_bare_lf() {
        let mut cur = Cursor::new(b"a\nb\n.\n".to_vec());
        let payload = read_data_section(&mut cur).unwrap();
        assert_eq!(payload, b"a\nb\n");
    }

    #[test]
    fn write_reply_emits_data_lines_then_terminal_line() {
        let reply = Reply::with_data(200, "OK DRIVER CAPABILITIES SENT", vec!["a", "b"]).unwrap();
        let mut out = Vec::new();
        write_reply(&mut out, &reply).unwrap();
        assert_eq!(out, b"200-a\r\n200-b\r\n200 OK DRIVER CAPABILITIES SENT\r\n");
    }

    #[test]
    fn write_reply_with_no_data_is_one_line() {
        let reply = Reply::new(204, "OK MESSAGE RECEIVED").unwrap();
        let mut out = Vec::new();
        write_reply(&mut out, &reply).unwrap();
        assert_eq!(out, b"204 OK MESSAGE RECEIVED\r\n");
    }
}
