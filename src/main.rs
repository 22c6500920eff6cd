use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use csv2json::cli::{self, Args, CliConfig, CliUtils};
use csv2json::conversion::{convert_batch, BatchEvent, ConversionEngine};
use csv2json::discovery;
use csv2json::error::ConversionError;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            cli::handle_error(&error);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            CliUtils::show_error(&format!("{} of the discovered files failed", failed));
            ExitCode::FAILURE
        }
        Err(error) => {
            match error.downcast_ref::<ConversionError>() {
                Some(conversion_error) => cli::handle_error(conversion_error),
                None => CliUtils::show_error(&format!("{:#}", error)),
            }
            ExitCode::FAILURE
        }
    }
}

/// Discover CSV files and run the requested mode. Returns the number of
/// files that failed.
fn run(config: &CliConfig) -> Result<usize> {
    let directory = &config.args.directory;
    let files = discovery::find_csv_files(directory, config.args.recursive)
        .with_context(|| format!("scanning '{}'", directory.display()))?;

    if files.is_empty() {
        if !config.is_quiet() {
            println!("No CSV files found in {}", directory.display());
        }
        return Ok(0);
    }

    if !config.is_quiet() {
        println!("Found {} CSV files", files.len());
    }

    if config.is_check_only() {
        run_check(config, &files)
    } else {
        run_convert(config, &files)
    }
}

/// Convert every discovered file, reporting progress per item.
fn run_convert(config: &CliConfig, files: &[PathBuf]) -> Result<usize> {
    let progress =
        (!config.is_quiet()).then(|| CliUtils::create_progress_bar(files.len() as u64));

    let result = convert_batch(
        files,
        &config.conversion_config,
        config.args.fail_fast,
        |event| {
            // suspend keeps the bar intact while the line goes out, and
            // still prints when the bar target is hidden (not a terminal)
            match &event {
                BatchEvent::Converted {
                    source,
                    destination,
                    ..
                } => {
                    if config.is_verbose() {
                        let line = CliUtils::clip_to_terminal(&format!(
                            "✓ {} -> {}",
                            source.display(),
                            destination.display()
                        ));
                        match &progress {
                            Some(pb) => pb.suspend(|| println!("{}", line)),
                            None => println!("{}", line),
                        }
                    }
                }
                BatchEvent::Failed { source, error } => {
                    let line = format!("✗ {}: {}", source.display(), error.user_message());
                    match &progress {
                        Some(pb) => pb.suspend(|| eprintln!("{}", line)),
                        None => eprintln!("{}", line),
                    }
                }
            }
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        },
    );

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    let outcome = result?;

    if !config.is_quiet() {
        CliUtils::show_success(
            &format!("Converted {} of {} files", outcome.succeeded, outcome.total()),
            config.is_quiet(),
        );
    }

    if config.want_stats() && !config.is_quiet() {
        println!("\nConversion statistics:");
        println!("{}", outcome.stats.summary());
        println!(
            "Total input: {}",
            CliUtils::format_file_size(outcome.stats.input_size_bytes)
        );
        println!(
            "Total output: {}",
            CliUtils::format_file_size(outcome.stats.output_size_bytes)
        );
        println!(
            "Elapsed: {}",
            CliUtils::format_duration(Duration::from_millis(outcome.stats.processing_time_ms))
        );
    }

    Ok(outcome.failures.len())
}

/// Parse every discovered file without writing anything.
fn run_check(config: &CliConfig, files: &[PathBuf]) -> Result<usize> {
    let engine = ConversionEngine::new(config.conversion_config.clone());
    let mut failed = 0;

    for file in files {
        match engine.check(file) {
            Ok(records) => {
                if config.is_verbose() {
                    CliUtils::show_success(
                        &format!("{} ({} records)", file.display(), records),
                        config.is_quiet(),
                    );
                }
            }
            Err(error) if error.is_recoverable() => {
                failed += 1;
                CliUtils::show_error(&format!("{}: {}", file.display(), error.user_message()));
            }
            Err(error) => return Err(error.into()),
        }
    }

    if !config.is_quiet() {
        let ok = files.len() - failed;
        println!("{} of {} files are well-formed CSV", ok, files.len());
    }

    Ok(failed)
}
