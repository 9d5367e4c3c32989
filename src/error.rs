//! Error handling for the scaffoldext application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

use crate::constants::{PROJECT_PREFIX, RESERVED_NAMESPACE};

/// Custom error types for scaffoldext operations.
///
/// This enum represents all possible errors that can occur while the
/// activation pipeline runs or while the resulting tree is written to disk.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while rendering an embedded template
    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// The anchor named in a register call is not part of the pipeline
    #[error("Action '{name}' not found in the pipeline.")]
    ActionNotFound { name: String },

    /// Project name does not comply with the extension naming convention
    #[error(
        "Invalid project name '{name}': extension projects must start with \
         '{PROJECT_PREFIX}'. Rename the project or pass --force to keep the \
         name as-is."
    )]
    InvalidProjectName { name: String },

    /// A custom namespace cannot be combined with the reserved one
    #[error(
        "It's not possible to define the custom namespace '{namespace}' when \
         creating a custom extension; the namespace is fixed to \
         '{RESERVED_NAMESPACE}'."
    )]
    NamespaceConflict { namespace: String },

    /// A file the pipeline relies on is missing from the project tree.
    /// Indicates an ordering bug between steps, not a user mistake.
    #[error("Expected '{path}' to be part of the project structure.")]
    MissingStructure { path: String },

    /// Represents errors that occur while parsing the config file contents
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in the host tool version string
    #[error("Invalid version '{version}'.")]
    InvalidVersion { version: String },
}

/// Convenience type alias for Results with scaffoldext's Error type.
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
