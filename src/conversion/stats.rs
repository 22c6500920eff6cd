//! Aggregate statistics for batch conversion runs

use serde::{Deserialize, Serialize};

use crate::conversion::engine::ConversionMetadata;

/// Counters accumulated across one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Total CSV bytes read
    pub input_size_bytes: u64,
    /// Total JSON bytes written
    pub output_size_bytes: u64,
    /// Data rows converted (headers excluded)
    pub record_count: usize,
    /// Files converted successfully
    pub file_count: usize,
    /// Summed per-file processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            record_count: 0,
            file_count: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one converted file into the counters
    pub fn record_file(&mut self, metadata: &ConversionMetadata) {
        self.input_size_bytes += metadata.input_size;
        self.output_size_bytes += metadata.output_size;
        self.record_count += metadata.record_count;
        self.file_count += 1;
        self.processing_time_ms += metadata.processing_time_ms;
        self.collected_at = chrono::Utc::now();
    }

    /// Average time per converted file
    pub fn avg_time_per_file_ms(&self) -> f32 {
        if self.file_count == 0 {
            return 0.0;
        }
        self.processing_time_ms as f32 / self.file_count as f32
    }

    /// Throughput over the summed processing time
    pub fn throughput_bytes_per_sec(&self) -> f32 {
        if self.processing_time_ms == 0 {
            return 0.0;
        }
        self.input_size_bytes as f32 / (self.processing_time_ms as f32 / 1000.0)
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} files ({} records) in {:.1}s - {} bytes in, {} bytes out",
            self.file_count,
            self.record_count,
            self.processing_time_ms as f32 / 1000.0,
            self.input_size_bytes,
            self.output_size_bytes
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
