// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! PDF Email Export to CSV
//!
//! Rebuilds email records from the plain text of a PDF mailbox export and
//! writes them as CSV.
//!
//! # Features
//!
//! - Page-ordered text extraction through `pdf-extract`
//! - Record boundaries detected from date lines, with pluggable date formats
//! - `From:` / `To:` / `Subject:` label matching with subject inference
//! - Fully quoted CSV output
//!
//! # Example
//!
//! ```rust
//! use pdf_email_csv::{DatePatterns, build_records};
//!
//! let text = "3/14/2024\nFrom: a@x.com\nTo: b@x.com\nHello\nBody line 1\n";
//! let records = build_records(text, &DatePatterns::default());
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].subject, "Hello");
//! assert_eq!(records[0].body, "Body line 1\n\n");
//! ```

mod builder;
mod config;
mod convert;
mod date;
mod error;
mod extract;
mod types;
mod writer;

pub use builder::{BuilderState, RecordBuilder, SplitLines, build_records, split_lines, step};
pub use config::{ConvertConfig, clean_path, ensure_file};
pub use convert::{convert, convert_with};
pub use date::{DatePattern, DatePatterns, RegexDatePattern};
pub use error::{ConvertError, Result};
pub use extract::{PdfTextExtractor, TextExtractor};
pub use types::{EmailRecord, is_blank};
pub use writer::{HEADER, write_records, write_records_to};
