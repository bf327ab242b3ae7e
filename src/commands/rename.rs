//! Rename command implementation.
//!
//! Replaces a substring in the names of all matching entries of one folder.

use super::models::RenameArgs;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;

/// One performed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: String,
    pub to: String,
}

/// Execute the rename command
///
/// **Public** - main entry point called from main.rs
///
/// Entries are processed in name order. An entry whose new name already
/// exists is left alone and reported.
///
/// # Returns
/// The renames that were performed
pub fn execute_rename(args: &RenameArgs) -> Result<Vec<Renamed>> {
    validate_args(args)?;

    println!(
        "Searching folder path '{}' for files...",
        args.folder.display()
    );

    let mut names = Vec::new();
    for entry in fs::read_dir(&args.folder)
        .with_context(|| format!("Failed to list folder '{}'", args.folder.display()))?
    {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("Skipping entry with non UTF-8 name: {:?}", name),
        }
    }
    names.sort();

    let mut renamed = Vec::new();
    for name in names {
        let new_name = name.replace(&args.search, &args.replacement);
        if new_name == name {
            continue;
        }

        let from = args.folder.join(&name);
        let to = args.folder.join(&new_name);
        if to.exists() {
            println!("  Skipped '{}': '{}' already exists", name, new_name);
            continue;
        }

        fs::rename(&from, &to)
            .with_context(|| format!("Failed to rename '{}' -> '{}'", name, new_name))?;
        println!("  Renamed '{}' -> '{}'", name, new_name);
        debug!("Renamed {} -> {}", from.display(), to.display());

        renamed.push(Renamed { from: name, to: new_name });
    }

    if renamed.is_empty() {
        println!("Done. No matching files found.");
    } else {
        println!("Done. {} files renamed.", renamed.len());
    }

    Ok(renamed)
}

/// Validate rename arguments
///
/// **Public** - can be called before execute_rename for early validation
pub fn validate_args(args: &RenameArgs) -> Result<()> {
    if !args.folder.exists() {
        anyhow::bail!(
            "Folder path '{}' does not exist. Aborting.",
            args.folder.display()
        );
    }

    if !args.folder.is_dir() {
        anyhow::bail!("Path '{}' is not a folder. Aborting.", args.folder.display());
    }

    if args.search.is_empty() {
        anyhow::bail!("Search string cannot be empty");
    }

    if args.search.contains(['/', '\\']) || args.replacement.contains(['/', '\\']) {
        anyhow::bail!("Search string and replacement cannot contain path separators");
    }

    Ok(())
}
