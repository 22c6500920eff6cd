//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csv2json")]
#[command(about = "Convert CSV files in a directory to JSON arrays of records")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan for CSV files
    #[arg(default_value = "datasets")]
    pub directory: PathBuf,

    /// Recursively scan subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Validate CSV files only, don't write JSON
    #[arg(long)]
    pub check: bool,

    /// Spaces per indentation level in the JSON output (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Largest CSV file to load (e.g. 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Abort the batch on the first failing file
    #[arg(long)]
    pub fail_fast: bool,

    /// Output aggregate conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Print a result line for every file
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let memory_limit = parse_memory_limit(&args.memory_limit)?;

        let config = ConversionConfig {
            indent_size: args.indent.unwrap_or(4),
            memory_limit,
        };

        config
            .validate()
            .map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose && !self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_check_only(&self) -> bool {
        self.args.check
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<u64> {
    let limit_str = match limit {
        None => return Ok(100 * 1024 * 1024), // 100MB default
        Some(limit_str) => limit_str.trim().to_uppercase(),
    };

    let invalid = || {
        ConversionError::configuration(format!("invalid memory limit: {}", limit_str))
    };

    if let Some(size) = limit_str.strip_suffix("GB") {
        let gb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((gb * 1024.0 * 1024.0 * 1024.0) as u64)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        let mb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((mb * 1024.0 * 1024.0) as u64)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        let kb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((kb * 1024.0) as u64)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        size.parse::<u64>().map_err(|_| invalid())
    } else {
        // Assume bytes
        limit_str.parse::<u64>().map_err(|_| invalid())
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", Self::glyph("✓", console::Color::Green), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", Self::glyph("✗", console::Color::Red), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", Self::glyph("⚠", console::Color::Yellow), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Clip a message to the terminal width so per-file lines stay on one row
    pub fn clip_to_terminal(message: &str) -> String {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);
        if message.chars().count() <= width {
            return message.to_string();
        }
        let clipped: String = message.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", clipped)
    }

    fn glyph(symbol: &str, color: console::Color) -> String {
        if Self::should_use_color() {
            console::style(symbol).fg(color).to_string()
        } else {
            symbol.to_string()
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ConversionError::NotFound { .. } => {
            eprintln!("\nTip: pass an existing directory, or create 'datasets' next to the binary");
        }
        ConversionError::MalformedCsv { .. } => {
            eprintln!("\nTip: use --check to find every malformed file without writing output");
        }
        ConversionError::FileTooLarge { .. } => {
            eprintln!("\nTip: use --memory-limit to raise the per-file size allowance");
        }
        _ => {}
    }

    eprintln!("\nTry 'csv2json --help' for usage information.");
}
