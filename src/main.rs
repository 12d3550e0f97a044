use ace_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the tally has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ACE Processor - NOAA SWPC Telemetry Converter");
    println!("=============================================");
    println!();
    println!("Convert daily ACE space-weather telemetry files from fixed-format");
    println!("text into CSV files, one per instrument product.");
    println!();
    println!("USAGE:");
    println!("    ace-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Convert ACE telemetry files to CSV (main command)");
    println!("    types       Report the registered file types and their configurations");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert all four products for the default date:");
    println!("    ace-processor process --input /data/ace_daily/2025");
    println!();
    println!("    # Convert specific products for a given day:");
    println!("    ace-processor process --input /data/ace_daily/2025 --date 20250215 \\");
    println!("                          --types _ace_mag_1m,_ace_swepam_1m --output ./csv");
    println!();
    println!("    # Inspect the file-type registry:");
    println!("    ace-processor types --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ace-processor <COMMAND> --help");
}
