/*!
 * # assmerge - merge ASS subtitle files
 *
 * A Rust library for combining several Advanced SubStation Alpha subtitle
 * files into one.
 *
 * ## Features
 *
 * - Merge any number of ASS documents, keeping event order per file
 * - Per-file and global time shifting, in microseconds
 * - Optional style renaming so styles from different files never collide
 * - Unused styles and empty events are dropped from the result
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `document`: Owned document model and static per-entity field lists
 * - `field_mapper`: ASS column names to model attribute names
 * - `merge`: The merge core:
 *   - `merge::copier`: Field-by-field deep copies
 *   - `merge::shift`: Time shifting
 *   - `merge::assembler`: Metadata seeding
 *   - `merge::engine`: The merge and style renaming
 * - `subtitle_processor`: ASS reading and writing
 * - `file_utils`: File system operations
 * - `app_config`: Merge run configuration
 * - `cli`: Command line parsing
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cli;
pub mod document;
pub mod errors;
pub mod field_mapper;
pub mod file_utils;
pub mod merge;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::{InputFile, LogLevel, MergeConfig};
pub use app_controller::Controller;
pub use document::{Document, Event, EventFields, ScriptInfo, Style, Timestamp};
pub use errors::{AppError, CliError, SchemaError, SubtitleError};
pub use merge::{merge, shift, MergeOptions, ShiftBounds};
