//! CSV to JSON batch converter
//!
//! A Rust CLI tool for locating CSV files in a directory tree and converting
//! each into a sibling JSON file holding an array of row objects keyed by
//! header column.

pub mod cli;
pub mod conversion;
pub mod discovery;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use conversion::{
    convert_batch, BatchEvent, BatchOutcome, ConversionConfig, ConversionEngine,
    ConversionMetadata, JsonData,
};
pub use error::{ConversionError, ConversionResult};

use std::path::Path;

/// Convert one CSV file to a JSON file with default configuration
pub fn convert_csv_file(
    csv_path: &Path,
    json_path: &Path,
) -> ConversionResult<ConversionMetadata> {
    convert_csv_file_with_config(csv_path, json_path, &ConversionConfig::default())
}

/// Convert one CSV file to a JSON file with custom configuration
pub fn convert_csv_file_with_config(
    csv_path: &Path,
    json_path: &Path,
    config: &ConversionConfig,
) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_file(csv_path, json_path)
}
