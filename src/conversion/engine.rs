//! Core conversion engine for CSV to JSON transformation

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use serde_json::map::Map;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::validation::check_quoting;

/// One parsed CSV file: the header row plus every data row as a JSON object
/// keyed by column name, in source order.
#[derive(Debug, Clone)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub records: Vec<Value>,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Rendered JSON output for one conversion
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Copy)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub record_count: usize,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Read one CSV file into records.
    ///
    /// The first row is the header. Rows shorter than the header are padded
    /// with empty strings; cells beyond the header width are dropped. Every
    /// value stays a JSON string.
    pub fn read_records(&self, csv_path: &Path) -> ConversionResult<RecordSet> {
        self.check_file_size(csv_path)?;

        let content = fs::read_to_string(csv_path)
            .map_err(|e| ConversionError::from(e).with_path(csv_path))?;
        check_quoting(&content).map_err(|e| e.with_path(csv_path))?;

        // flexible: row-length mismatches are handled here, not by the parser
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ConversionError::from(e).with_path(csv_path))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| ConversionError::from(e).with_path(csv_path))?;
            let mut object = Map::with_capacity(headers.len());
            for (idx, name) in headers.iter().enumerate() {
                let cell = row.get(idx).unwrap_or("");
                object.insert(name.clone(), Value::String(cell.to_string()));
            }
            records.push(Value::Object(object));
        }

        Ok(RecordSet { headers, records })
    }

    /// Render records as a pretty-printed JSON array.
    ///
    /// serde_json writes non-ASCII characters literally, which keeps the
    /// output byte-for-byte readable for multi-byte content.
    pub fn render(&self, records: &[Value]) -> ConversionResult<String> {
        let indent = " ".repeat(self.config.indent_size as usize);
        let mut buf = Vec::with_capacity(records.len() * 64 + 16);

        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
        buf.push(b'\n');

        String::from_utf8(buf)
            .map_err(|e| ConversionError::io(format!("rendered JSON is not UTF-8: {}", e), None))
    }

    /// Convert one CSV file to JSON text without writing it anywhere.
    pub fn convert(&self, csv_path: &Path) -> ConversionResult<JsonData> {
        let start_time = Instant::now();

        let record_set = self.read_records(csv_path)?;
        let content = self.render(&record_set.records)?;

        let input_size = fs::metadata(csv_path).map(|m| m.len()).unwrap_or(0);
        let metadata = ConversionMetadata {
            input_size,
            output_size: content.len() as u64,
            record_count: record_set.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(JsonData { content, metadata })
    }

    /// Convert one CSV file and write the JSON output, creating or
    /// overwriting the destination.
    pub fn convert_file(
        &self,
        csv_path: &Path,
        json_path: &Path,
    ) -> ConversionResult<ConversionMetadata> {
        let json_data = self.convert(csv_path)?;

        fs::write(json_path, &json_data.content)
            .map_err(|e| ConversionError::from(e).with_path(json_path))?;

        Ok(json_data.metadata)
    }

    /// Parse a file without producing output. Used by check mode; returns
    /// the number of data rows.
    pub fn check(&self, csv_path: &Path) -> ConversionResult<usize> {
        Ok(self.read_records(csv_path)?.len())
    }

    fn check_file_size(&self, csv_path: &Path) -> ConversionResult<()> {
        let size = fs::metadata(csv_path)
            .map_err(|e| ConversionError::from(e).with_path(csv_path))?
            .len();
        if size > self.config.memory_limit {
            return Err(ConversionError::FileTooLarge {
                size,
                limit: self.config.memory_limit,
            });
        }
        Ok(())
    }
}
