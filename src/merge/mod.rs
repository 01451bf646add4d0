/*!
 * Merging of ASS documents.
 *
 * This module provides:
 * - `copier`: field-by-field deep copies of events, styles and documents
 * - `assembler`: metadata seeding for new documents
 * - `shift`: uniform time shifting of a document's events
 * - `engine`: the merge itself, including style renaming
 */

pub mod assembler;
pub mod copier;
pub mod engine;
pub mod shift;

pub use assembler::{seed, SEEDED_FIELDS};
pub use copier::{copy_document, copy_event, copy_style};
pub use engine::{merge, style_digest, MergeOptions};
pub use shift::{shift, ShiftBounds};
