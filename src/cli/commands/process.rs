//! Process command implementation for ACE processor CLI
//!
//! The complete conversion workflow: configuration from arguments, the
//! fatal input-directory check, the sequential per-type pipeline run, and
//! the final report.

use super::shared::setup_logging;
use crate::app::services::pipeline::{Pipeline, RunStats};
use crate::app::services::registry::TypeRegistry;
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::constants::output_filename;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Process command runner for the ACE processor
///
/// Orchestrates the workflow:
/// 1. Set up logging and build configuration from arguments
/// 2. Check the input location (the only fatal check of a run)
/// 3. Run the pipeline over the configured file-type/path pairs
/// 4. Report the success tally
pub fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting ACE processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = Config::new(args.input_dir.clone(), args.output_dir.clone())
        .with_date_stamp(args.date_stamp.clone())
        .with_file_types(args.get_file_types());
    if args.dry_run {
        config = config.with_dry_run();
    }

    // Fatal if the input location is unreachable; everything after this is
    // recovered per file.
    config.validate()?;

    let registry = TypeRegistry::builtin()?;
    let pairs = config.file_pairs();

    info!(
        "Processing {} file types from {}",
        pairs.len(),
        config.input_dir.display()
    );

    if config.dry_run {
        return run_dry_run(&config);
    }

    config.ensure_output_directory()?;

    let pipeline = Pipeline::new(&registry);
    let stats = pipeline.run(&pairs, &config.output_dir, args.show_progress());

    let elapsed = start_time.elapsed();
    generate_final_report(&args, &stats, elapsed)?;

    Ok(stats)
}

/// Show what would be processed without reading or writing data files
fn run_dry_run(config: &Config) -> Result<RunStats> {
    info!("Performing dry run - no files will be created");

    let stats = RunStats::default();

    for (file_type, input_path) in config.file_pairs() {
        if input_path.exists() {
            println!("Would process: {}", input_path.display());
            println!(
                "Would create:  {}",
                config.output_dir.join(output_filename(&file_type)).display()
            );
        } else {
            warn!("Input file missing: {}", input_path.display());
        }
    }

    info!("Dry run complete");
    Ok(stats)
}

/// Generate the final processing report
fn generate_final_report(
    args: &ProcessArgs,
    stats: &RunStats,
    elapsed: std::time::Duration,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => generate_human_report(args, stats, elapsed),
        OutputFormat::Json => generate_json_report(stats, elapsed),
    }
}

/// Generate human-readable report
fn generate_human_report(
    args: &ProcessArgs,
    stats: &RunStats,
    elapsed: std::time::Duration,
) -> Result<()> {
    if args.quiet {
        // Quiet mode still reports the headline tally
        println!(
            "Processed {} files successfully.",
            stats.files_processed
        );
        return Ok(());
    }

    println!();
    println!("{}", "ACE Processing Complete".bold());
    println!("------------------------------------------");
    println!(
        "   Files processed: {} of {} attempted",
        stats.files_processed.to_string().green(),
        stats.files_attempted
    );
    println!("   Rows written:    {}", stats.rows_written);
    println!("   Elapsed:         {}", HumanDuration(elapsed));

    if !stats.outcomes.is_empty() {
        println!();
        println!("Output files:");
        for outcome in &stats.outcomes {
            println!(
                "   {} ({} rows)",
                outcome.output_path.display(),
                outcome.rows_loaded
            );
        }
    }

    if !stats.errors.is_empty() {
        println!();
        println!("{} {}", "Failures:".yellow(), stats.errors.len());
        for error in &stats.errors {
            println!("   {}", error);
        }
    }

    println!();
    println!("Processed {} files successfully.", stats.files_processed);
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &RunStats, elapsed: std::time::Duration) -> Result<()> {
    let json_stats = serde_json::json!({
        "files_attempted": stats.files_attempted,
        "files_processed": stats.files_processed,
        "rows_written": stats.rows_written,
        "elapsed_seconds": elapsed.as_secs_f64(),
        "errors": stats.errors,
        "output_files": &stats.outcomes,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&json_stats)
            .map_err(|e| crate::Error::configuration(format!("Failed to serialize report: {}", e)))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::FileOutcome;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_stats() -> RunStats {
        RunStats {
            files_attempted: 4,
            files_processed: 3,
            rows_written: 120,
            outcomes: vec![FileOutcome {
                file_type: "_ace_mag_1m".to_string(),
                rows_loaded: 40,
                output_path: PathBuf::from("output/_ace_mag_1m.csv"),
            }],
            errors: vec!["_ace_sis_5m: File not found".to_string()],
        }
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("20250101_ace_mag_1m.txt"),
            "header\n",
        )
        .unwrap();

        let output_dir = temp_dir.path().join("output");
        let config = Config::new(temp_dir.path().to_path_buf(), output_dir.clone())
            .with_file_types(vec!["_ace_mag_1m".to_string()])
            .with_dry_run();

        let stats = run_dry_run(&config).unwrap();
        assert_eq!(stats.files_processed, 0);
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_generate_json_report() {
        let result = generate_json_report(&sample_stats(), std::time::Duration::from_secs(2));
        assert!(result.is_ok());
    }
}
