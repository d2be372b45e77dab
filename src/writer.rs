//! CSV output of reconstructed records

use crate::error::{ConvertError, Result};
use crate::types::EmailRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header line, written unquoted
pub const HEADER: &str = "Date,From,To,Subject,Body";

/// Write records as CSV to `path`, replacing any existing file
///
/// Returns the number of records written. Any I/O failure names `path`.
pub fn write_records<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a EmailRecord>,
) -> Result<usize> {
    let file = File::create(path).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let count = write_rows(BufWriter::new(file), records).map_err(|e| write_error(path, e))?;
    debug!("Wrote {count} records to {}", path.display());
    Ok(count)
}

/// Write the header and one fully quoted line per record
///
/// Every field is wrapped in double quotes and embedded quotes are doubled.
/// Nothing else is escaped; commas and newlines stay inside the quotes.
pub fn write_records_to<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a EmailRecord>,
) -> Result<usize> {
    Ok(write_rows(writer, records)?)
}

fn write_rows<'a, W: Write>(
    mut writer: W,
    records: impl IntoIterator<Item = &'a EmailRecord>,
) -> std::result::Result<usize, csv::Error> {
    writeln!(writer, "{HEADER}")?;

    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut count = 0;
    for record in records {
        csv.serialize(record)?;
        count += 1;
    }
    csv.flush()?;
    Ok(count)
}

fn write_error(path: &Path, err: csv::Error) -> ConvertError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => io::Error::other(format!("{kind:?}")),
    };
    ConvertError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str, body: &str) -> EmailRecord {
        EmailRecord {
            date: "3/14/2024".into(),
            from: "a@x.com".into(),
            to: "b@x.com".into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let mut out = Vec::new();
        let count = write_records_to(&mut out, &[]).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Date,From,To,Subject,Body\n");
    }

    #[test]
    fn test_fields_always_quoted() {
        let mut out = Vec::new();
        write_records_to(&mut out, &[record("Hello", "")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date,From,To,Subject,Body\n\"3/14/2024\",\"a@x.com\",\"b@x.com\",\"Hello\",\"\"\n"
        );
    }

    #[test]
    fn test_quotes_doubled_newlines_kept() {
        let mut out = Vec::new();
        write_records_to(&mut out, &[record("Say \"hi\"", "a, b\nc\n")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Say \"\"hi\"\"\""));
        assert!(text.contains("\"a, b\nc\n\""));
    }

    #[test]
    fn test_io_failure_names_destination() {
        let io_err = csv::Error::from(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        let err = write_error(Path::new("/mail/out.csv"), io_err);
        assert!(matches!(err, ConvertError::Write { ref path, .. } if path == Path::new("/mail/out.csv")));
        assert_eq!(err.to_string(), "Failed to write /mail/out.csv: disk full");
    }
}
