use super::{apply_default_avatar, decode_entries, decode_records, encode_record, read_input};
use std::io::Write;
use crate::message::MessageRecord;
use crate::utils::CompereError;
use serde_json::json;

#[test]
fn test_decode_entries() {
    let payload = json!([
        { "ID": 1, "Author": "Alice", "Text": "When is lunch?", "Type": 1, "Score": 4, "Voted": false },
        { "ID": 2, "Author": "Bob", "Text": "Great slides", "Type": 2, "Score": 0, "Voted": true }
    ])
    .to_string();

    let records = decode_entries(&payload).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        MessageRecord::new("Alice", "When is lunch?", true, "4", "1", false)
    );
    assert_eq!(
        records[1],
        MessageRecord::new("Bob", "Great slides", false, "0", "2", true)
    );
}

#[test]
fn test_decode_entries_null_and_empty() {
    assert!(decode_entries("null").unwrap().is_empty());
    assert!(decode_entries("[]").unwrap().is_empty());
}

#[test]
fn test_decode_entries_rejects_bad_type() {
    let payload = json!([{ "ID": 1, "Type": "poll" }]).to_string();
    let err = decode_entries(&payload).unwrap_err();
    assert!(matches!(err, CompereError::Decode(_)));
}

#[test]
fn test_decode_entries_rejects_malformed_json() {
    let err = decode_entries("[{").unwrap_err();
    assert!(matches!(err, CompereError::Decode(_)));
}

#[test]
fn test_decode_records() {
    let payload = json!([{
        "textId": "msg-42",
        "author": "Alice",
        "avatarImage": "alice.png",
        "content": "What time is it?",
        "isQuestion": true,
        "voted": false,
        "voteScore": "3"
    }])
    .to_string();

    let records = decode_records(&payload).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].avatar_image.as_deref(), Some("alice.png"));
    assert_eq!(records[0].text_id, "msg-42");
}

#[test]
fn test_apply_default_avatar_only_fills_unset() {
    let mut records = vec![
        MessageRecord::new("Alice", "Hi", false, "0", "1", false),
        MessageRecord::new("Bob", "Hey", false, "0", "2", false).with_avatar_image("bob.png"),
    ];

    apply_default_avatar(&mut records, "default.png");

    assert_eq!(records[0].avatar_image.as_deref(), Some("default.png"));
    assert_eq!(records[1].avatar_image.as_deref(), Some("bob.png"));
}

#[test]
fn test_encode_record_is_single_line() {
    let record = MessageRecord::new("Alice", "line one\nline two", true, "3", "msg-42", false);
    let line = encode_record(&record).unwrap();
    assert!(!line.contains('\n'));

    let decoded = decode_records(&format!("[{line}]")).unwrap();
    assert_eq!(decoded, vec![record]);
}

#[test]
fn test_read_input_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"ID": 5, "Author": "Zoe", "Text": "Hi", "Type": "c"}}]"#).unwrap();

    let raw = read_input(Some(file.path())).unwrap();
    let records = decode_entries(&raw).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text_id, "5");
    assert!(!records[0].is_question);
}

#[test]
fn test_read_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_input(Some(dir.path().join("missing.json").as_path())).unwrap_err();
    assert!(matches!(err, CompereError::Io(_)));
}
