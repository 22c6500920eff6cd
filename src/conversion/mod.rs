//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, batch
//! driver, and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::{convert_batch, BatchEvent, BatchOutcome};
pub use config::ConversionConfig;
pub use engine::{ConversionEngine, ConversionMetadata, JsonData, RecordSet};
pub use stats::ConversionStatistics;
