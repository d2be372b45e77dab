//! End-to-end conversion: extract, rebuild records, write CSV

use crate::builder::build_records;
use crate::config::ConvertConfig;
use crate::date::DatePatterns;
use crate::error::Result;
use crate::extract::{PdfTextExtractor, TextExtractor};
use crate::writer::write_records;
use tracing::{debug, info};

/// Convert with the `pdf-extract` extractor and the built-in date patterns
///
/// Returns the number of records written.
pub fn convert(config: &ConvertConfig) -> Result<usize> {
    convert_with(config, &PdfTextExtractor::new(), &DatePatterns::default())
}

/// Convert with a caller-supplied extractor and date patterns
///
/// A missing input aborts before anything is extracted or written. Later
/// failures leave whatever was already written on disk.
pub fn convert_with(
    config: &ConvertConfig,
    extractor: &dyn TextExtractor,
    patterns: &DatePatterns,
) -> Result<usize> {
    config.validate_input()?;

    let text = extractor.extract(&config.input_path)?;
    debug!(
        "Extracted {} bytes from {}",
        text.len(),
        config.input_path.display()
    );

    let records = build_records(&text, patterns);
    let count = write_records(&config.output_path, &records)?;

    info!(
        "Converted {} to {} ({count} emails)",
        config.input_path.display(),
        config.output_path.display()
    );
    Ok(count)
}
