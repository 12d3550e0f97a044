//! Command-line argument definitions for ACE processor
//!
//! Defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_DATE_STAMP, DEFAULT_OUTPUT_DIR, FILE_TYPE_KEYS};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the ACE telemetry processor
///
/// Converts NOAA SWPC ACE space-weather telemetry files from fixed-format
/// text into CSV files, one per instrument product.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ace-processor",
    version,
    about = "Convert NOAA SWPC ACE telemetry files from fixed-format text to CSV"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ACE processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert ACE telemetry files to CSV (main command)
    Process(ProcessArgs),
    /// Report the registered file types and their parsing configurations
    Types(TypesArgs),
}

/// Arguments for the process command (main conversion)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory with daily ACE telemetry files
    ///
    /// Should contain files named like 20250101_ace_epam_5m.txt. The run
    /// aborts with a nonzero exit status if this directory is unreachable.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory with daily ACE telemetry files"
    )]
    pub input_dir: PathBuf,

    /// Output directory for generated CSV files
    ///
    /// Created if it doesn't exist. Generated files are named after their
    /// file-type key, e.g. _ace_mag_1m.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for generated CSV files"
    )]
    pub output_dir: PathBuf,

    /// Date stamp of the daily files to process (YYYYMMDD)
    #[arg(
        long = "date",
        value_name = "YYYYMMDD",
        default_value = DEFAULT_DATE_STAMP,
        help = "Date stamp of the daily files to process"
    )]
    pub date_stamp: String,

    /// Specific file types to process (comma-separated list)
    ///
    /// If not specified, processes all four ACE products:
    /// _ace_epam_5m, _ace_mag_1m, _ace_sis_5m, _ace_swepam_1m
    #[arg(
        short = 't',
        long = "types",
        value_name = "LIST",
        help = "Comma-separated list of file types to process"
    )]
    pub file_types: Option<FileTypeList>,

    /// Perform a dry run without actual processing
    ///
    /// Shows which files would be read and written without creating output.
    #[arg(long = "dry-run", help = "Show what would be processed without writing output")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the final report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the types command (registry report)
#[derive(Debug, Clone, Parser)]
pub struct TypesArgs {
    /// Output format for the registry report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the registry report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated file-type lists
#[derive(Debug, Clone)]
pub struct FileTypeList {
    pub file_types: Vec<String>,
}

impl FromStr for FileTypeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let file_types: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if file_types.is_empty() {
            return Err(Error::configuration("File-type list cannot be empty"));
        }

        for file_type in &file_types {
            if !FILE_TYPE_KEYS.contains(&file_type.as_str()) {
                return Err(Error::unknown_file_type(format!(
                    "{} (available: {})",
                    file_type,
                    FILE_TYPE_KEYS.join(", ")
                )));
            }
        }

        Ok(FileTypeList { file_types })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.date_stamp.len() != 8 || !self.date_stamp.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::configuration(format!(
                "Date stamp must be 8 digits (YYYYMMDD), got '{}'",
                self.date_stamp
            )));
        }
        Ok(())
    }

    /// Get the list of file types to process
    pub fn get_file_types(&self) -> Vec<String> {
        match &self.file_types {
            Some(list) => list.file_types.clone(),
            None => FILE_TYPE_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl TypesArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
