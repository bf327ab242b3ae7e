//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod profile;
pub mod rename;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, export_build, ExportOutcome};
pub use models::{ExportArgs, ExportLayout, ExportSource, ProfileArgs, RenameArgs};
pub use profile::{execute_profile, validate_args};
pub use rename::{execute_rename, Renamed};
pub use utils::{display_version, prompt_choice, version_text};
