//! Email record reconstruction from extracted text
//!
//! Text pulled out of a PDF has no markup left, so message boundaries are
//! inferred from line shapes: a line containing a date opens a new record,
//! `From:`/`To:`/`Subject:` prefixes fill the headers, and everything after
//! the subject becomes the body. The whole pass is a fold of [`step`] over
//! the lines, exposed lazily through [`RecordBuilder`].

use crate::date::DatePatterns;
use crate::types::{EmailRecord, is_blank};
use std::iter::Fuse;
use std::mem;
use tracing::{debug, trace};

const FROM_LABEL: &str = "From:";
const TO_LABEL: &str = "To:";
const SUBJECT_LABEL: &str = "Subject:";

/// Builder state between two lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BuilderState {
    /// No date line seen yet
    #[default]
    Idle,
    /// A record is being filled
    Open(EmailRecord),
}

impl BuilderState {
    /// Finalize at end of input, keeping the record only if it has a subject
    #[must_use]
    pub fn finish(self) -> Option<EmailRecord> {
        match self {
            Self::Open(record) if record.has_subject() => Some(record),
            Self::Open(record) => {
                trace!("Dropping record without subject: {}", record.date);
                None
            }
            Self::Idle => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Advance the state by one line
///
/// Returns the next state and the record finalized by this line, if any. Only
/// a date line can finalize a record.
#[must_use]
pub fn step(
    state: BuilderState,
    line: &str,
    patterns: &DatePatterns,
) -> (BuilderState, Option<EmailRecord>) {
    if patterns.matches(line) {
        let finished = state.finish();
        trace!("Date line opens record: {}", line.trim());
        return (BuilderState::Open(EmailRecord::new(line.trim())), finished);
    }

    let BuilderState::Open(mut record) = state else {
        return (BuilderState::Idle, None);
    };

    if let Some(rest) = line.strip_prefix(FROM_LABEL) {
        rest.trim().clone_into(&mut record.from);
    } else if let Some(rest) = line.strip_prefix(TO_LABEL) {
        rest.trim().clone_into(&mut record.to);
    } else if let Some(rest) = line.strip_prefix(SUBJECT_LABEL) {
        rest.trim().clone_into(&mut record.subject);
    } else if !is_blank(line) && !record.has_subject() && record.has_sender() {
        // No explicit label; first text after the sender stands in
        line.trim().clone_into(&mut record.subject);
    } else if record.has_subject() {
        record.push_body_line(line);
    }

    (BuilderState::Open(record), None)
}

/// Split on `\r\n`, `\r` or `\n`, keeping empty lines
#[must_use]
pub const fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: Some(text) }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        if let Some(idx) = rest.find(['\r', '\n']) {
            let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
            self.rest = Some(&rest[idx + terminator..]);
            Some(&rest[..idx])
        } else {
            self.rest = None;
            Some(rest)
        }
    }
}

/// Lazy sequence of finalized records over a sequence of lines
#[derive(Debug)]
pub struct RecordBuilder<'p, I: Iterator> {
    lines: Fuse<I>,
    patterns: &'p DatePatterns,
    state: BuilderState,
}

impl<'p, I> RecordBuilder<'p, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    #[must_use]
    pub fn new(lines: impl IntoIterator<IntoIter = I>, patterns: &'p DatePatterns) -> Self {
        Self {
            lines: lines.into_iter().fuse(),
            patterns,
            state: BuilderState::Idle,
        }
    }
}

impl<I> Iterator for RecordBuilder<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = EmailRecord;

    fn next(&mut self) -> Option<EmailRecord> {
        for line in self.lines.by_ref() {
            let (state, finished) = step(mem::take(&mut self.state), line.as_ref(), self.patterns);
            self.state = state;
            if finished.is_some() {
                return finished;
            }
        }
        mem::take(&mut self.state).finish()
    }
}

/// Reconstruct every email in the extracted text
#[must_use]
pub fn build_records(text: &str, patterns: &DatePatterns) -> Vec<EmailRecord> {
    let records: Vec<EmailRecord> = RecordBuilder::new(split_lines(text), patterns).collect();
    debug!("Built {} email records", records.len());
    records
}
