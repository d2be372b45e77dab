//! Core record type reconstructed from extracted PDF text

use serde::{Deserialize, Serialize};
use std::fmt;

/// One email reconstructed from a run of extracted lines
///
/// All fields hold raw text as it appeared in the PDF. Nothing is parsed or
/// normalized; the date in particular is the whole trimmed line that opened
/// the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Line that matched a date pattern, trimmed
    #[serde(rename = "Date")]
    pub date: String,

    /// Value after the `From:` label
    #[serde(rename = "From")]
    pub from: String,

    /// Value after the `To:` label
    #[serde(rename = "To")]
    pub to: String,

    /// Explicit `Subject:` value or the first line after `From:`
    #[serde(rename = "Subject")]
    pub subject: String,

    /// Every line after the subject, each followed by `\n`
    #[serde(rename = "Body")]
    pub body: String,
}

impl EmailRecord {
    /// Open a new record for the given date line
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Whether the record carries a subject and is kept when finalized
    #[must_use]
    pub fn has_subject(&self) -> bool {
        !is_blank(&self.subject)
    }

    /// Whether a sender has been seen
    #[must_use]
    pub fn has_sender(&self) -> bool {
        !is_blank(&self.from)
    }

    /// Body lines without their separators
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }

    /// Append one original line to the body
    pub fn push_body_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }
}

impl fmt::Display for EmailRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} -> {} | {}",
            self.date, self.from, self.to, self.subject
        )
    }
}

/// Empty or whitespace-only
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
