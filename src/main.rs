//! Ivie developer tools CLI
//!
//! Zone profile reports, bulk renaming and distributable build export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use ivie_tools::commands::{
    display_version, execute_export, execute_profile, execute_rename, validate_args, ExportArgs,
    ExportOutcome, ProfileArgs, RenameArgs,
};
use ivie_tools::report::ReportConfig;
use ivie_tools::utils::config::{
    DEFAULT_PROFILE_DUMP, DEFAULT_REPORT_OUTPUT, DEFAULT_REPORT_TITLE, EXPORT_BUILD_CONFIGURATION,
};
use std::path::PathBuf;

/// Ivie developer tools
#[derive(Parser, Debug)]
#[command(name = "ivie-tools")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a zone profiler dump as an HTML report
    Profile {
        /// Zone profiler XML dump
        #[arg(short, long, default_value = DEFAULT_PROFILE_DUMP)]
        input: PathBuf,

        /// Output path for the HTML report
        #[arg(short, long, default_value = DEFAULT_REPORT_OUTPUT)]
        output: PathBuf,

        /// Also write the flattened model as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Report title
        #[arg(long, default_value = DEFAULT_REPORT_TITLE)]
        title: String,
    },

    /// Replace part of the file names of all matching files in a folder
    Rename {
        /// Folder to search
        folder: PathBuf,

        /// Substring to replace
        search: String,

        /// Replacement text
        replacement: String,
    },

    /// Export a distributable build
    Export {
        /// Repository root containing builds/ and workdir/
        #[arg(short, long, default_value = ".")]
        base: PathBuf,

        /// Build configuration to export
        #[arg(short, long, default_value = EXPORT_BUILD_CONFIGURATION)]
        configuration: String,

        /// Overwrite an existing export without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Profile {
            input,
            output,
            json,
            title,
        } => {
            let args = ProfileArgs {
                input,
                output_html: output,
                output_json: json,
                report_config: ReportConfig::new().with_title(title),
            };

            // Validate args first
            validate_args(&args)?;

            execute_profile(args)?;
        }

        Commands::Rename {
            folder,
            search,
            replacement,
        } => {
            execute_rename(&RenameArgs {
                folder,
                search,
                replacement,
            })?;
        }

        Commands::Export {
            base,
            configuration,
            yes,
        } => {
            let args = ExportArgs {
                base,
                configuration,
                assume_yes: yes,
            };

            if execute_export(&args)? == ExportOutcome::Aborted {
                log::info!("Export aborted, nothing was changed");
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
