/*!
 * Merge engine: folds several ASS documents into one.
 *
 * Events are appended document by document in input order. Each document
 * contributes only the styles its own events reference. With style renaming
 * enabled, every referenced style name is replaced by a digest of the name and
 * the document's position, so styles from different documents can never
 * collide and each event still points at exactly one style.
 */

use log::debug;
use sha1::{Digest, Sha1};
use std::collections::{HashMap, HashSet};

use crate::document::Document;
use crate::errors::SchemaError;
use crate::merge::assembler;
use crate::merge::copier::{copy_event, copy_style};

/// Options controlling a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Replace style names with per-document digests
    pub rename_styles: bool,
}

/// Digest-derived replacement name for a style.
///
/// Lowercase hex SHA-1 of the style name followed by the decimal document
/// index. Stable across runs.
pub fn style_digest(style_name: &str, document_index: usize) -> String {
    let mut hasher = Sha1::new();
    hasher.update(style_name.as_bytes());
    hasher.update(document_index.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Merge `docs` into a single new document.
///
/// Script Info is seeded from the first document only. Events whose text is
/// empty are dropped; styles no event of their document references are
/// dropped. Without `rename_styles`, identically named styles from different
/// documents are all kept under the same name.
pub fn merge(docs: &[Document], options: MergeOptions) -> Result<Document, SchemaError> {
    let mut merged = Document::new();
    if let Some(first) = docs.first() {
        merged.info = assembler::seed(&first.info);
    }

    for (index, doc) in docs.iter().enumerate() {
        let mut used_style_names: HashSet<String> = HashSet::new();
        let mut rename_table: HashMap<(usize, String), String> = HashMap::new();
        let mut dropped_events = 0usize;

        for event in &doc.events {
            let mut copy = copy_event(event)?;
            let original_style = copy.style().to_string();

            if options.rename_styles {
                let renamed = style_digest(&original_style, index);
                copy.fields_mut().style = renamed.clone();
                rename_table.insert((index, original_style.clone()), renamed);
            }
            used_style_names.insert(original_style);

            if copy.text().is_empty() {
                dropped_events += 1;
                continue;
            }

            merged.events.push(copy);
        }

        let mut kept_styles = 0usize;
        for style in &doc.styles {
            let mut copy = copy_style(style)?;

            if !used_style_names.contains(&copy.name) {
                continue;
            }

            if options.rename_styles {
                if let Some(renamed) = rename_table.get(&(index, copy.name.clone())) {
                    copy.name = renamed.clone();
                }
            }

            merged.styles.push(copy);
            kept_styles += 1;
        }

        debug!(
            "Merged document {} ({}): {} event(s) dropped as empty, {} of {} style(s) kept",
            index,
            doc,
            dropped_events,
            kept_styles,
            doc.styles.len()
        );
    }

    Ok(merged)
}
