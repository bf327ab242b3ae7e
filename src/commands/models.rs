use crate::report::ReportConfig;
use crate::utils::config::{
    BUILDS_DIR_NAME, DEFAULT_PROFILE_DUMP, DEFAULT_REPORT_OUTPUT, EXPORT_BASE_FILES,
    EXPORT_BUILD_CONFIGURATION, EXPORT_BUILD_FILES, EXPORT_DIR_NAME, EXPORT_PROJECT_NAME,
    EXPORT_WORKDIR_FILES, WORKDIR_DIR_NAME,
};
use std::path::{Path, PathBuf};

/// Arguments for the profile command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProfileArgs {
    /// Zone profiler XML dump
    pub input: PathBuf,

    /// Output path for the HTML report
    pub output_html: PathBuf,

    /// Output path for the flattened model as JSON (optional)
    pub output_json: Option<PathBuf>,

    /// Report configuration
    pub report_config: ReportConfig,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PROFILE_DUMP),
            output_html: PathBuf::from(DEFAULT_REPORT_OUTPUT),
            output_json: None,
            report_config: ReportConfig::default(),
        }
    }
}

/// Arguments for the rename command
#[derive(Debug, Clone)]
pub struct RenameArgs {
    /// Folder whose entries are renamed
    pub folder: PathBuf,

    /// Substring to replace in each entry name
    pub search: String,

    /// Replacement for every occurrence of `search`
    pub replacement: String,
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Repository root holding `builds/` and `workdir/`
    pub base: PathBuf,

    /// Build configuration to export
    pub configuration: String,

    /// Overwrite an existing export without asking
    pub assume_yes: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            configuration: EXPORT_BUILD_CONFIGURATION.to_string(),
            assume_yes: false,
        }
    }
}

/// Where a manifest entry is copied from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSource {
    /// Repository root
    Base,
    /// `builds/<configuration>`
    Builds,
    /// `workdir`
    Workdir,
}

/// Resolved locations for one export run
#[derive(Debug, Clone)]
pub struct ExportLayout {
    pub project_name: String,
    pub configuration: String,
    pub base_path: PathBuf,
    pub export_path: PathBuf,
    pub builds_path: PathBuf,
    pub workdir_path: PathBuf,
}

impl ExportLayout {
    pub fn new(base: impl AsRef<Path>, configuration: &str) -> Self {
        let base_path = base.as_ref().to_path_buf();
        Self {
            project_name: EXPORT_PROJECT_NAME.to_string(),
            configuration: configuration.to_string(),
            export_path: base_path.join(EXPORT_DIR_NAME).join(EXPORT_PROJECT_NAME),
            builds_path: base_path.join(BUILDS_DIR_NAME).join(configuration),
            workdir_path: base_path.join(WORKDIR_DIR_NAME),
            base_path,
        }
    }

    pub fn source_dir(&self, source: ExportSource) -> &Path {
        match source {
            ExportSource::Base => &self.base_path,
            ExportSource::Builds => &self.builds_path,
            ExportSource::Workdir => &self.workdir_path,
        }
    }
}

/// Files copied into every export, relative to their source directory
pub fn export_manifest() -> Vec<(ExportSource, &'static str)> {
    let base = EXPORT_BASE_FILES.iter().map(|f| (ExportSource::Base, *f));
    let builds = EXPORT_BUILD_FILES.iter().map(|f| (ExportSource::Builds, *f));
    let workdir = EXPORT_WORKDIR_FILES.iter().map(|f| (ExportSource::Workdir, *f));

    base.chain(builds).chain(workdir).collect()
}
