//! Round-trip coverage for the command/data-section framing.

use drv_proto::{read_command, read_data_section, write_reply, Reply};
use std::io::Cursor;

#[test]
fn say_text_data_section_round_trip() {
    // S3 in spec.md §8: "SAY TEXT plain\r\nhello\r\nworld\r\n.\r\n"
    let mut input = Cursor::new(b"SAY TEXT plain\r\nhello\r\nworld\r\n.\r\n".to_vec());

    let verb = read_command(&mut input).unwrap().unwrap();
    assert_eq!(verb, vec!["SAY", "TEXT", "plain"]);

    let payload = read_data_section(&mut input).unwrap();
    assert_eq!(payload, b"hello\r\nworld\r\n");

    // Nothing left to read.
    assert_eq!(read_command(&mut input).unwrap(), None);
}

#[test]
fn reply_sequence_is_contiguous_lines() {
    let mut out = Vec::new();
    write_reply(&mut out, &Reply::new(299, "OK RECEIVING DATA").unwrap()).unwrap();
    write_reply(
        &mut out,
        &Reply::with_data(204, "OK MESSAGE RECEIVED", vec!["1"]).unwrap(),
    )
    .unwrap();

    assert_eq!(
        out,
        b"299 OK RECEIVING DATA\r\n204-1\r\n204 OK MESSAGE RECEIVED\r\n"
    );
}

#[test]
fn index_mark_event_wire_form() {
    // S6 in spec.md §8.
    let reply = Reply::with_data(
        702,
        "INDEX MARK EVENT",
        vec!["index_mark 7 \"intro\" 12 300"],
    )
    .unwrap();
    let mut out = Vec::new();
    write_reply(&mut out, &reply).unwrap();
    assert_eq!(
        out,
        b"702-index_mark 7 \"intro\" 12 300\r\n702 INDEX MARK EVENT\r\n"
    );
}
