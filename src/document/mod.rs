/*!
 * Document model for ASS subtitles.
 *
 * This module provides:
 * - The owned document types (`Document`, `Event`, `Style`, `ScriptInfo`)
 * - Value types for timestamps and colors
 * - Static per-entity field lists with typed accessors
 */

pub mod fields;
pub mod model;

// Re-export types used by other modules
pub use fields::{EntityField, EventField, FieldKind, FieldSet, StyleField};
pub use model::{Color, Document, Event, EventFields, FieldValue, ScriptInfo, Style, Timestamp};
