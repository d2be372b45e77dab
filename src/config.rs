//! Conversion settings supplied by whichever front end drives the pipeline

use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

/// Input PDF and output CSV locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConvertConfig {
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Build from paths as typed by a user, stripping surrounding quotes
    #[must_use]
    pub fn from_raw(input: &str, output: &str) -> Self {
        Self::new(clean_path(input), clean_path(output))
    }

    /// Fail with [`ConvertError::InputNotFound`] unless the input is a file
    pub fn validate_input(&self) -> Result<()> {
        ensure_file(&self.input_path)
    }
}

/// Trim whitespace and surrounding double quotes from a typed path
///
/// Terminals and file managers often paste paths wrapped in quotes.
#[must_use]
pub fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches('"'))
}

/// Fail with [`ConvertError::InputNotFound`] unless `path` is an existing file
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConvertError::InputNotFound(path.to_path_buf()))
    }
}
