use log::debug;

use crate::document::Document;
use crate::errors::SchemaError;
use crate::merge::copier::copy_document;

/// Which ends of each event a shift moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftBounds {
    pub start: bool,
    pub end: bool,
}

impl ShiftBounds {
    pub const BOTH: ShiftBounds = ShiftBounds { start: true, end: true };
    pub const START_ONLY: ShiftBounds = ShiftBounds { start: true, end: false };
    pub const END_ONLY: ShiftBounds = ShiftBounds { start: false, end: true };
}

impl Default for ShiftBounds {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Return a copy of `doc` with every event moved by `offset_us` microseconds.
///
/// The offset may be negative and results are not clamped: an event pushed
/// before zero keeps its negative timestamp. The input is never modified.
pub fn shift(doc: &Document, offset_us: i64, bounds: ShiftBounds) -> Result<Document, SchemaError> {
    let mut shifted = copy_document(doc)?;

    for event in &mut shifted.events {
        let fields = event.fields_mut();
        if bounds.start {
            fields.start = fields.start.shifted_by(offset_us);
        }
        if bounds.end {
            fields.end = fields.end.shifted_by(offset_us);
        }
    }

    debug!("Shifted {} by {}us ({:?})", shifted, offset_us, bounds);
    Ok(shifted)
}
