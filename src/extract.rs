//! Plain-text extraction from PDF documents

use crate::error::{ConvertError, Result};
use std::path::Path;
use tracing::{debug, trace};

/// Source of the plain text the record builder consumes
pub trait TextExtractor {
    /// Full text of the document, pages concatenated in order
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Text extractor backed by `pdf-extract`
///
/// Text positioning moves that start a new line inside a text object come
/// out as line breaks, so header labels stay at the start of their lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Text of every page, in page order
    pub fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
            ConvertError::Extraction(format!("cannot read {}: {e}", path.display()))
        })?;

        debug!("Extracted {} pages from {}", pages.len(), path.display());
        for (index, text) in pages.iter().enumerate() {
            trace!("Page {}: {} bytes of text", index + 1, text.len());
        }
        Ok(pages)
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let text = pdf_extract::extract_text(path).map_err(|e| {
            ConvertError::Extraction(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!("Extracted {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}
