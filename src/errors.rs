/*!
 * Error types for the assmerge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when an entity's field set and the field mapper disagree.
///
/// These indicate a programming error (schema drift), never bad user input,
/// and abort the whole run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A source field name maps to no attribute on the destination entity
    #[error("Schema drift: field '{external}' maps to unknown attribute '{canonical}'")]
    UnmappedField {
        /// Field name as used by the subtitle format
        external: String,
        /// Name produced by the field mapper
        canonical: String,
    },

    /// A value of the wrong kind was assigned to a field
    #[error("Schema drift: field '{field}' expects a {expected} value, got {found}")]
    KindMismatch {
        /// Canonical field name
        field: &'static str,
        /// Kind the field stores
        expected: &'static str,
        /// Kind that was supplied
        found: &'static str,
    },
}

/// Errors that can occur while reading or writing ASS documents
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A data line does not match its section's Format declaration
    #[error("Malformed line {line}: {message}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// A column value could not be parsed into the field's type
    #[error("Invalid value for {field} on line {line}: '{value}'")]
    InvalidValue {
        /// 1-based line number
        line: usize,
        /// External field name
        field: String,
        /// Raw text of the value
        value: String,
    },

    /// A timestamp is not in H:MM:SS.cc form
    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// A color is neither &H-prefixed hex nor a decimal integer
    #[error("Invalid color: '{0}'")]
    InvalidColor(String),

    /// Writing the serialized document failed
    #[error("Failed to write subtitle output: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors produced while parsing the command line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// A flag that takes a value was given none
    #[error("Missing value after '{flag}'")]
    MissingValue {
        /// The flag as written
        flag: String,
    },

    /// A token looks like a flag but is not one
    #[error("Unknown flag: '{0}'")]
    UnknownFlag(String),

    /// A sync value is not an integer
    #[error("Invalid number for '{flag}': '{value}'")]
    InvalidNumber {
        /// The flag as written
        flag: String,
        /// The rejected value
        value: String,
    },

    /// No file to merge was given
    #[error("No input files given")]
    NoInputFiles,

    /// Any other usage error reported by the argument parser
    #[error("{0}")]
    Usage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the field mapper or entity copier
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Error from subtitle parsing or writing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from the command line
    #[error("Command line error: {0}")]
    Cli(#[from] CliError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Keep the whole context chain
        Self::Unknown(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
