//! Configuration options for CSV to JSON conversion

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Spaces per indentation level in the JSON output (0-8)
    pub indent_size: u8,
    /// Largest CSV file the engine will load, in bytes
    pub memory_limit: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 4,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the per-file memory limit
    pub fn with_memory_limit(mut self, limit_bytes: u64) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("indent size must be 0-8 spaces".to_string());
        }

        if self.memory_limit < 1024 {
            return Err("memory limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
