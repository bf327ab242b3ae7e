//! HTML report rendering using minijinja.
//!
//! This module turns a flattened `RenderModel` into a static timeline page
//! and pretty-prints the result.

pub mod generator;
pub mod pretty;

// Re-export main types
pub use generator::{generate_report, render_report, ReportConfig};
pub use pretty::prettify_html;
