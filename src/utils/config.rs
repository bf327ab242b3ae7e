//! Configuration and constants for the CLI.

/// Only this thread of a zone profile dump is reported
pub const PROFILED_THREAD_ID: i64 = 0;

/// Frames with `elapsed` at or below this value are treated as noise and dropped
pub const FRAME_NOISE_THRESHOLD: i64 = 10;

// The walk root (the frame) sits at depth 1, so an event directly inside its
// frame is seen at depth 2. Subtracting both levels puts it on level 0.
pub const EVENT_WRAPPER_LEVELS: usize = 2;

/// Raw profiler time units to report pixels
pub const RENDER_SCALE: f64 = 0.1;

pub const DEFAULT_REPORT_TITLE: &str = "Ivie Zone Profile";
pub const DEFAULT_PROFILE_DUMP: &str = "workdir/profile_lite.xml";
pub const DEFAULT_REPORT_OUTPUT: &str = "output.html";

// Element and attribute names written by the zone profiler
pub const THREAD_TAG: &str = "thread";
pub const FRAME_TAG: &str = "frame";
pub const EVENT_TAG: &str = "event";

// Build export layout
pub const EXPORT_PROJECT_NAME: &str = "Ivie";
pub const EXPORT_DIR_NAME: &str = "export";
pub const EXPORT_BUILD_CONFIGURATION: &str = "FinalRelease";
pub const BUILDS_DIR_NAME: &str = "builds";
pub const WORKDIR_DIR_NAME: &str = "workdir";

/// Files copied from the repository root
pub const EXPORT_BASE_FILES: &[&str] = &["usage_and_keybinds.txt"];

/// Files copied from the selected build configuration
pub const EXPORT_BUILD_FILES: &[&str] = &["Ivie.exe"];

/// Files copied from the working directory (paths kept relative in the export)
pub const EXPORT_WORKDIR_FILES: &[&str] = &[
    "shader/area_clip.frag",
    "shader/background_gradient.frag",
    "shader/convert_freeimage.frag",
    "shader/convert_webm.frag",
    "SourceHanSans-Medium.ttc",
    "selawk.ttf",
    "ivie_logo_32.png",
];

/// Invalid answers tolerated before the prompt prints a cancel hint
pub const PROMPT_RETRIES_BEFORE_HINT: usize = 5;
