//! Error handling for confsweep.
//! Every error is fatal: the sweep stops at the first failure and
//! combinations that were already written stay on disk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for confsweep operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Cannot open template file '{path}'.")]
    TemplateNotFound { path: PathBuf },

    #[error("Cannot read '{path}': {source}.")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write '{path}': {source}.")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create directory '{path}': {source}.")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template line that cannot be parsed
    #[error("Template syntax error on line {line}: {message}.")]
    SyntaxError { line: usize, message: String },

    #[error("Template defines no parameters.")]
    EmptyTemplate,

    /// A `start...step...end` value that cannot be expanded
    #[error("Malformed range for '{key}' ('{value}'): {reason}.")]
    MalformedRange {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Number of combinations does not fit into 64 bits.")]
    CombinationOverflow,

    /// Represents failures while serializing the sweep manifest
    #[error("Manifest error: {0}.")]
    ManifestError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with confsweep's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
