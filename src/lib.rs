//! Ivie developer tools
//!
//! Utilities used while developing the Ivie image viewer:
//! - Zone profiler dumps flattened into a static HTML timeline report
//! - Bulk renaming of files in a folder
//! - Exporting a distributable build
//!
//! ## Getting Started
//!
//! ```bash
//! ivie-tools profile --input workdir/profile_lite.xml --output output.html
//! ivie-tools --help
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod report;
pub mod utils;
