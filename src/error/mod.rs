//! Error types and handling infrastructure for CSV to JSON conversion

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed CSV: {message}")]
    MalformedCsv {
        message: String,
        line: Option<u64>,
        path: Option<PathBuf>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV file too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionError {
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    pub fn malformed(message: String, line: Option<u64>, path: Option<PathBuf>) -> Self {
        Self::MalformedCsv {
            message,
            line,
            path,
        }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Attach (or replace) the file path on errors that carry one.
    pub fn with_path(self, file: &std::path::Path) -> Self {
        match self {
            Self::MalformedCsv { message, line, .. } => Self::MalformedCsv {
                message,
                line,
                path: Some(file.to_path_buf()),
            },
            Self::Io { message, .. } => Self::Io {
                message,
                path: Some(file.to_path_buf()),
            },
            other => other,
        }
    }

    /// True when the batch driver may skip this file and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedCsv { .. } | Self::Io { .. } | Self::FileTooLarge { .. }
        )
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => {
                format!("directory not found: {}", path.display())
            }
            Self::MalformedCsv {
                message,
                line,
                path,
            } => {
                let mut msg = String::from("malformed CSV");
                if let Some(path) = path {
                    msg.push_str(&format!(" in {}", path.display()));
                }
                if let Some(line) = line {
                    msg.push_str(&format!(" at line {}", line));
                }
                msg.push_str(&format!(": {}", message));
                msg
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
            Self::FileTooLarge { size, limit } => {
                format!("CSV file too large: {} bytes (limit: {} bytes)", size, limit)
            }
            Self::Configuration { message } => {
                format!("invalid configuration: {}", message)
            }
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        // read_to_string reports undecodable bytes as InvalidData; that is a
        // content problem, not an IO failure
        if err.kind() == std::io::ErrorKind::InvalidData {
            Self::MalformedCsv {
                message: "file is not valid UTF-8".to_string(),
                line: None,
                path: None,
            }
        } else {
            Self::Io {
                message: err.to_string(),
                path: None,
            }
        }
    }
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        match err.kind() {
            csv::ErrorKind::Io(io_err) => Self::Io {
                message: io_err.to_string(),
                path: None,
            },
            csv::ErrorKind::Utf8 { .. } => Self::MalformedCsv {
                message: "record contains invalid UTF-8".to_string(),
                line,
                path: None,
            },
            _ => Self::MalformedCsv {
                message: err.to_string(),
                line,
                path: None,
            },
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io {
            message: format!("JSON serialization failed: {}", err),
            path: None,
        }
    }
}

impl From<walkdir::Error> for ConversionError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        Self::Io {
            message: err.to_string(),
            path,
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
