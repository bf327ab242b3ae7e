//! Export command implementation.
//!
//! The export command:
//! 1. Resolves export, builds and workdir paths
//! 2. Asks before wiping a non-empty export folder
//! 3. Copies every manifest file, reporting each one
//!
//! A missing or failing file does not stop the pass; the command reports
//! the failures and returns an error once every file has been tried.

use super::models::{export_manifest, ExportArgs, ExportLayout};
use super::utils::prompt_choice;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// How an export run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Every manifest file was copied
    Complete { copied: usize },
    /// The operator declined to overwrite the existing export
    Aborted,
}

/// Execute the export command against the process's stdin/stdout
///
/// **Public** - main entry point called from main.rs
pub fn execute_export(args: &ExportArgs) -> Result<ExportOutcome> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    export_build(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Export a distributable build, prompting on `input` / reporting to `output`
///
/// **Public** - testable core of execute_export
///
/// # Errors
/// * The export folder cannot be removed or created
/// * One or more manifest files are missing or failed to copy
pub fn export_build<R: BufRead, W: Write>(
    args: &ExportArgs,
    input: &mut R,
    output: &mut W,
) -> Result<ExportOutcome> {
    let layout = ExportLayout::new(&args.base, &args.configuration);

    writeln!(output, "Exporting a new distributable build.\n")?;
    writeln!(output, "  Project              : {}", layout.project_name)?;
    writeln!(output, "  Export configuration : {}\n", layout.configuration)?;
    writeln!(output, "  Export path          : {}", layout.export_path.display())?;
    writeln!(output, "  Builds path          : {}", layout.builds_path.display())?;
    writeln!(output, "  Workdir path         : {}\n", layout.workdir_path.display())?;

    if exists_not_empty(&layout.export_path)? {
        writeln!(
            output,
            "Export target folder already exists. Everything inside will be deleted."
        )?;

        let overwrite = if args.assume_yes {
            Some('y')
        } else {
            prompt_choice("Do you wish to overwrite?", "yn", Some('y'), input, output)?
        };

        if overwrite != Some('y') {
            writeln!(output, "Export aborted: Overwrite not allowed.\n")?;
            return Ok(ExportOutcome::Aborted);
        }

        fs::remove_dir_all(&layout.export_path).with_context(|| {
            format!("Failed to delete '{}'", layout.export_path.display())
        })?;
        writeln!(output, "Export target folder has been deleted.\n")?;
    }

    fs::create_dir_all(&layout.export_path)
        .with_context(|| format!("Failed to create '{}'", layout.export_path.display()))?;

    let mut copied = 0;
    let mut failed = 0;

    for (source, file) in export_manifest() {
        let src_path = layout.source_dir(source).join(file);
        let dst_path = layout.export_path.join(file);

        write!(
            output,
            "  Copying {:<55} -> {:<60} ... ",
            src_path.display(),
            dst_path.display()
        )?;
        output.flush()?;

        match copy_file(&src_path, &dst_path) {
            Ok(true) => {
                writeln!(output, "OK")?;
                copied += 1;
            }
            Ok(false) => {
                writeln!(output, "File does not exist!")?;
                failed += 1;
            }
            Err(e) => {
                writeln!(output, "{}", e)?;
                failed += 1;
            }
        }
    }

    writeln!(output)?;

    if failed > 0 {
        writeln!(
            output,
            "Export had errors and it may be partial or completely failed. See errors above.\n"
        )?;
        anyhow::bail!("{} of {} files failed to export", failed, copied + failed);
    }

    writeln!(output, "Export complete!\n")?;
    info!("Exported {} files to {}", copied, layout.export_path.display());

    Ok(ExportOutcome::Complete { copied })
}

/// Copy one file, creating the destination's directories
///
/// **Private** - returns `Ok(false)` when the source does not exist
fn copy_file(src: &Path, dst: &Path) -> std::io::Result<bool> {
    if !src.exists() {
        return Ok(false);
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(src, dst)?;
    debug!("Copied {} bytes: {}", bytes, dst.display());

    Ok(true)
}

fn exists_not_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to list '{}'", path.display()))?;
    Ok(entries.next().is_some())
}
