//! Conversion pipeline orchestration
//!
//! Walks the configured file-type/path pairs in order, validates each input,
//! drives the loader and CSV writer, and tallies per-file outcomes. A failed
//! file is logged and skipped; the run always continues to the next pair.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::csv_writer::write_csv;
use super::loader::load_file;
use super::registry::TypeRegistry;
use crate::app::models::FileOutcome;
use crate::constants::output_filename;
use crate::{Error, Result};

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Pairs whose key was found in the registry and were attempted
    pub files_attempted: usize,

    /// Files converted successfully
    pub files_processed: usize,

    /// Total rows written across all output files
    pub rows_written: usize,

    /// Per-file outcomes for successful conversions
    pub outcomes: Vec<FileOutcome>,

    /// Descriptions of per-file failures, for the final report
    pub errors: Vec<String>,
}

/// Sequential conversion pipeline over an immutable type registry
#[derive(Debug)]
pub struct Pipeline<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline borrowing the registry for lookups
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Process every configured (file-type, input-path) pair in order.
    ///
    /// Pairs with an unregistered key are silent no-ops: they count neither
    /// as attempts nor as failures.
    pub fn run(
        &self,
        pairs: &[(String, PathBuf)],
        output_dir: &Path,
        show_progress: bool,
    ) -> RunStats {
        let mut stats = RunStats::default();

        let progress = if show_progress {
            Some(create_progress_bar(pairs.len() as u64))
        } else {
            None
        };

        for (file_type, input_path) in pairs {
            if let Some(pb) = &progress {
                pb.set_message(format!("Processing {}", file_type));
            }

            if !self.registry.contains(file_type) {
                debug!("File type {} not registered, skipping", file_type);
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                continue;
            }

            stats.files_attempted += 1;
            match self.process_file(file_type, input_path, output_dir) {
                Ok(outcome) => {
                    info!(
                        "Converted {}: {} rows -> {}",
                        file_type,
                        outcome.rows_loaded,
                        outcome.output_path.display()
                    );
                    stats.files_processed += 1;
                    stats.rows_written += outcome.rows_loaded;
                    stats.outcomes.push(outcome);
                }
                Err(e) => {
                    error!("Failed to process {}: {}", file_type, e);
                    stats.errors.push(format!("{}: {}", file_type, e));
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message(format!("Processed {} files", stats.files_processed));
        }

        stats
    }

    /// Validate and convert a single input file.
    ///
    /// The suffix check runs before any read of file content, so a
    /// mispointed path is rejected without touching the file. The check is a
    /// deliberately loose substring match, not anchored to the end of the
    /// path.
    pub fn process_file(
        &self,
        file_type: &str,
        input_path: &Path,
        output_dir: &Path,
    ) -> Result<FileOutcome> {
        let config = self
            .registry
            .lookup(file_type)
            .ok_or_else(|| Error::unknown_file_type(file_type))?;

        info!("Processing file: {}", input_path.display());
        debug!("Expected suffix: {}", config.suffix);

        if !input_path.exists() {
            return Err(Error::file_not_found(input_path.display().to_string()));
        }

        if !input_path.to_string_lossy().contains(&config.suffix) {
            return Err(Error::suffix_mismatch(
                input_path.display().to_string(),
                &config.suffix,
            ));
        }

        let result = load_file(input_path, config)?;
        if result.rows.is_empty() {
            return Err(Error::empty_result(input_path.display().to_string()));
        }

        let output_path = output_dir.join(output_filename(file_type));
        write_csv(&result.rows, &output_path, &config.columns)?;

        Ok(FileOutcome {
            file_type: file_type.to_string(),
            rows_loaded: result.rows.len(),
            output_path,
        })
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}
