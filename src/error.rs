//! Error types for PDF to CSV conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input path does not reference an existing file
    #[error("File does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The PDF could not be opened or a page could not be decoded
    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),

    /// The destination could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV serialization failure
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Reading a path from the console failed
    #[error("Failed to read input: {0}")]
    Prompt(#[source] io::Error),

    /// A custom date pattern did not compile
    #[error("Invalid date pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
