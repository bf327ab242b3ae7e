//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while flattening a profile dump
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile dump file does not exist. Searched for '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed profile dump: {0}")]
    MalformedInput(String),
}

impl From<roxmltree::Error> for ProfileError {
    fn from(err: roxmltree::Error) -> Self {
        ProfileError::MalformedInput(format!("XML parsing the profile dump failed: {}", err))
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Rendered report is not well-formed markup: {0}")]
    Markup(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
