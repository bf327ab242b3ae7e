//! JSON model output writer.
//!
//! Writes the flattened render model to JSON for inspection or tooling.

use super::validate_output_path;
use crate::parser::schema::RenderModel;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a render model to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_model(model: &RenderModel, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing render model to: {}", output_path.display());

    validate_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, model).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Render model written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a render model back from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_model(input_path: impl AsRef<Path>) -> Result<RenderModel, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading render model from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let model: RenderModel =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Render model loaded: {} threads", model.threads.len());

    Ok(model)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
