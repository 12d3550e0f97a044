//! Types command implementation for ACE processor CLI
//!
//! Reports the registered file types and their parsing configurations in
//! human or JSON form, to stdout or a file.

use super::shared::setup_types_logging;
use crate::app::services::pipeline::RunStats;
use crate::app::services::registry::TypeRegistry;
use crate::cli::args::{OutputFormat, TypesArgs};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Types command runner for the ACE processor
pub fn run_types(args: TypesArgs) -> Result<RunStats> {
    setup_types_logging(&args)?;

    info!("Generating file-type registry report");

    let registry = TypeRegistry::builtin()?;

    let report = match args.output_format {
        OutputFormat::Human => human_report(&registry),
        OutputFormat::Json => json_report(&registry)?,
    };

    emit(&report, args.output_file.as_deref())?;

    Ok(RunStats::default())
}

fn human_report(registry: &TypeRegistry) -> String {
    let mut output = format!(
        "ACE File-Type Registry\n\
         ======================\n\
         Registered types: {}\n\n",
        registry.len()
    );

    for (key, config) in registry.iter_sorted() {
        output.push_str(&format!(
            "{}\n  suffix:       {}\n  header lines: {}\n  columns ({}): {}\n  NA markers:   {}\n\n",
            key,
            config.suffix,
            config.skip_rows,
            config.columns.len(),
            config.columns.join(", "),
            config.na_values.join(", "),
        ));
    }

    output
}

fn json_report(registry: &TypeRegistry) -> Result<String> {
    let mut types = Vec::new();
    for (key, config) in registry.iter_sorted() {
        let mut entry = serde_json::to_value(config).map_err(|e| {
            Error::configuration(format!("Failed to serialize registry report: {}", e))
        })?;
        entry["key"] = serde_json::Value::String(key.to_string());
        types.push(entry);
    }

    let report = serde_json::json!({
        "registered_types": registry.len(),
        "types": types,
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize registry report: {}", e)))
}

fn emit(report: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| {
                Error::configuration(format!(
                    "Failed to write report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Registry report written to: {}", path.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}
