//! HTML report output writer.
//!
//! Writes rendered reports to files with proper encoding.

use super::validate_output_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write HTML content to a file
///
/// **Public** - main entry point for report output
///
/// # Arguments
/// * `html_content` - Markup from the report generator
/// * `output_path` - Path to output HTML file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let html = generate_report(&model, None)?;
/// write_html(&html, "output.html")?;
/// ```
pub fn write_html(html_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(ext) = output_path.extension() {
        if ext != "html" && ext != "htm" {
            debug!("Warning: File does not have .html extension: {}", output_path.display());
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(html_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;

    writer.flush().map_err(OutputError::WriteFailed)?;

    let file_size = html_content.len();
    info!(
        "Report written successfully ({} bytes, {:.2} KB)",
        file_size,
        file_size as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const VALID_HTML: &str = "<!DOCTYPE html>\n<html>\n <body>\n  <p>ok</p>\n </body>\n</html>\n";

    #[test]
    fn test_write_html() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_html(VALID_HTML, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, VALID_HTML);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/output.html");

        write_html(VALID_HTML, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_html_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_html(VALID_HTML, temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
