//! Batch conversion over a list of discovered CSV files

use std::path::{Path, PathBuf};

use crate::cli::path_mapping::json_destination;
use crate::conversion::engine::{ConversionEngine, ConversionMetadata};
use crate::conversion::stats::ConversionStatistics;
use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};

/// One failed file in a batch
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: ConversionError,
}

/// Result of a whole batch run
#[derive(Debug)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failures: Vec<BatchFailure>,
    pub stats: ConversionStatistics,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What happened to a single file, reported through the observer callback.
pub enum BatchEvent<'a> {
    Converted {
        source: &'a Path,
        destination: &'a Path,
        metadata: ConversionMetadata,
    },
    Failed {
        source: &'a Path,
        error: &'a ConversionError,
    },
}

/// Convert every file in `files`, writing each sibling `.json` destination.
///
/// Failures on individual files are collected and the batch keeps going,
/// unless `fail_fast` is set, in which case the first failure aborts the
/// run. Fatal errors (anything not recoverable at the batch level) always
/// abort. The observer runs once per file, after its conversion settles.
pub fn convert_batch<F>(
    files: &[PathBuf],
    config: &ConversionConfig,
    fail_fast: bool,
    mut observer: F,
) -> ConversionResult<BatchOutcome>
where
    F: FnMut(BatchEvent<'_>),
{
    let engine = ConversionEngine::new(config.clone());
    let mut outcome = BatchOutcome {
        succeeded: 0,
        failures: Vec::new(),
        stats: ConversionStatistics::new(),
    };

    for csv_path in files {
        let json_path = json_destination(csv_path);
        match engine.convert_file(csv_path, &json_path) {
            Ok(metadata) => {
                outcome.succeeded += 1;
                outcome.stats.record_file(&metadata);
                observer(BatchEvent::Converted {
                    source: csv_path,
                    destination: &json_path,
                    metadata,
                });
            }
            Err(error) => {
                observer(BatchEvent::Failed {
                    source: csv_path,
                    error: &error,
                });
                if fail_fast || !error.is_recoverable() {
                    return Err(error);
                }
                outcome.failures.push(BatchFailure {
                    path: csv_path.clone(),
                    error,
                });
            }
        }
    }

    Ok(outcome)
}
