use pdf_email_csv::{ConvertError, EmailRecord, HEADER, write_records};
use std::fs;
use std::path::Path;

fn sample() -> Vec<EmailRecord> {
    vec![
        EmailRecord {
            date: "3/14/2024".into(),
            from: "\"Doe, John\" <john@x.com>".into(),
            to: "b@x.com".into(),
            subject: "Re: the \"plan\"".into(),
            body: "Line one, with comma\nHe said \"ok\"\n".into(),
        },
        EmailRecord {
            date: "Mar 15, 2024".into(),
            from: "c@x.com".into(),
            to: String::new(),
            subject: "Second".into(),
            body: String::new(),
        },
    ]
}

#[test]
fn test_round_trip_through_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = sample();

    let count = write_records(&path, &records).unwrap();
    assert_eq!(count, 2);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["Date", "From", "To", "Subject", "Body"]);

    let read: Vec<EmailRecord> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(read, records);
}

#[test]
fn test_file_starts_with_plain_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_records(&path, &sample()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Date,From,To,Subject,Body\n\"3/14/2024\",\"\"\"Doe, John\"\" <john@x.com>\""));
    assert!(text.ends_with("\"Mar 15, 2024\",\"c@x.com\",\"\",\"Second\",\"\"\n"));
}

#[test]
fn test_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale content that is much longer than the new output\n".repeat(10)).unwrap();

    write_records(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{HEADER}\n"));
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.csv");

    let err = write_records(&path, &sample()).unwrap_err();
    assert!(matches!(err, ConvertError::Write { .. }));
    assert!(err.to_string().contains("out.csv"));
}

#[test]
fn test_failed_flush_names_destination() {
    let full = Path::new("/dev/full");
    if !full.exists() {
        return;
    }

    let err = write_records(full, &sample()).unwrap_err();

    assert!(matches!(err, ConvertError::Write { ref path, .. } if path == full));
    assert!(err.to_string().starts_with("Failed to write /dev/full"));
}
