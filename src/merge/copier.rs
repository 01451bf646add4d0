/*!
 * Deep copies of events, styles and whole documents.
 *
 * Copies are built field by field: every populated field of the source is
 * renamed through the field mapper, resolved against the destination's field
 * list and assigned. A name that does not resolve is schema drift and is
 * reported, never skipped.
 */

use crate::document::{Document, EntityField, Event, FieldSet, Style};
use crate::errors::SchemaError;
use crate::field_mapper;
use crate::merge::assembler;

/// Copy every populated field of `source` onto a fresh entity of the same type
pub fn copy_fields<T: FieldSet>(source: &T) -> Result<T, SchemaError> {
    let mut copy = T::default();

    for (external, value) in source.populated_fields() {
        let canonical = field_mapper::canonical_name(external);
        let field = T::Field::from_canonical(&canonical).ok_or_else(|| {
            SchemaError::UnmappedField {
                external: external.to_string(),
                canonical: canonical.clone(),
            }
        })?;
        copy.set(field, value)?;
    }

    Ok(copy)
}

/// Detached copy of an event, keeping its variant
pub fn copy_event(event: &Event) -> Result<Event, SchemaError> {
    Ok(match event {
        Event::Dialogue(fields) => Event::dialogue(copy_fields(fields)?),
        Event::Comment(fields) => Event::comment(copy_fields(fields)?),
    })
}

/// Detached copy of a style
pub fn copy_style(style: &Style) -> Result<Style, SchemaError> {
    copy_fields(style)
}

/// Detached copy of a document.
///
/// Metadata goes through [`assembler::seed`], so only the allow-listed
/// Script Info keys survive.
pub fn copy_document(doc: &Document) -> Result<Document, SchemaError> {
    let mut copy = Document::new();
    copy.info = assembler::seed(&doc.info);

    copy.events = doc
        .events
        .iter()
        .map(copy_event)
        .collect::<Result<Vec<_>, _>>()?;

    copy.styles = doc
        .styles
        .iter()
        .map(copy_style)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(copy)
}
