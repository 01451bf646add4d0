use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Write;
use std::path::Path;

use crate::document::{
    Document, EntityField, Event, EventField, EventFields, FieldSet, Style, StyleField,
};
use crate::errors::SubtitleError;
use crate::field_mapper;
use crate::file_utils::FileManager;

// @module: ASS subtitle reading and writing

// @const: Section header regex, e.g. "[V4+ Styles]"
static SECTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").unwrap());

// @enum: Section the reader is currently in
#[derive(Debug, Clone, PartialEq)]
enum Section {
    Preamble,
    ScriptInfo,
    Styles,
    Events,
    Other(String),
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "script info" => Self::ScriptInfo,
            "v4+ styles" | "v4 styles" | "v4 styles+" => Self::Styles,
            "events" => Self::Events,
            _ => Self::Other(name.trim().to_string()),
        }
    }
}

/// Column layout declared by a `Format:` line; `None` marks a column this
/// crate does not model.
type Columns<F> = Vec<Option<F>>;

fn default_columns<F: EntityField>() -> Columns<F> {
    F::ALL.iter().copied().map(Some).collect()
}

// @resolves: Format line column names through the field mapper
fn resolve_columns<F: EntityField>(format: &str, line_number: usize) -> Columns<F> {
    format
        .split(',')
        .map(|name| {
            let name = name.trim();
            let field = F::from_canonical(&field_mapper::canonical_name(name));
            if field.is_none() {
                warn!("Ignoring unknown column '{}' declared on line {}", name, line_number);
            }
            field
        })
        .collect()
}

// @parses: One data line into an entity according to the column layout
fn parse_entity<T: FieldSet>(
    rest: &str,
    columns: &[Option<T::Field>],
    line_number: usize,
) -> Result<T, SubtitleError> {
    if columns.is_empty() {
        return Err(SubtitleError::MalformedLine {
            line: line_number,
            message: "section declares no columns".to_string(),
        });
    }

    // The last column keeps any remaining commas (event text may contain them)
    let values: Vec<&str> = rest.splitn(columns.len(), ',').collect();
    if values.len() != columns.len() {
        return Err(SubtitleError::MalformedLine {
            line: line_number,
            message: format!("expected {} fields, found {}", columns.len(), values.len()),
        });
    }

    let last = columns.len() - 1;
    let mut entity = T::default();

    for (position, (column, raw)) in columns.iter().zip(values).enumerate() {
        let Some(field) = *column else {
            continue;
        };
        let raw = if position == last { raw } else { raw.trim() };

        let value = field
            .kind()
            .parse(raw)
            .ok_or_else(|| SubtitleError::InvalidValue {
                line: line_number,
                field: field.external_name().to_string(),
                value: raw.to_string(),
            })?;

        entity
            .set(field, value)
            .map_err(|e| SubtitleError::MalformedLine {
                line: line_number,
                message: e.to_string(),
            })?;
    }

    Ok(entity)
}

/// Parse the text of an ASS file into a document.
///
/// Only `[Script Info]`, `[V4+ Styles]` and `[Events]` are read; any other
/// section is skipped. Columns are matched by the names in each section's
/// `Format:` line, falling back to the standard V4+ order when a section has
/// none.
pub fn parse_ass(input: &str) -> Result<Document, SubtitleError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut doc = Document::new();
    let mut section = Section::Preamble;
    let mut style_columns: Option<Columns<StyleField>> = None;
    let mut event_columns: Option<Columns<EventField>> = None;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = SECTION_REGEX.captures(trimmed) {
            section = Section::from_header(&caps[1]);
            if let Section::Other(name) = &section {
                debug!("Skipping section [{}] at line {}", name, line_number);
            }
            continue;
        }

        match section {
            Section::ScriptInfo => {
                if trimmed.starts_with(';') || trimmed.starts_with("!:") {
                    continue;
                }
                match trimmed.split_once(':') {
                    Some((key, value)) => doc.info.insert(key.trim(), value.trim()),
                    None => debug!("Ignoring Script Info line {} without a key", line_number),
                }
            }
            Section::Styles => {
                let Some((kind, rest)) = line.trim_start().split_once(':') else {
                    continue;
                };
                match kind.trim() {
                    "Format" => style_columns = Some(resolve_columns(rest, line_number)),
                    "Style" => {
                        let columns = style_columns.get_or_insert_with(default_columns);
                        let style: Style = parse_entity(rest.trim_start(), columns, line_number)?;
                        doc.styles.push(style);
                    }
                    other => debug!("Ignoring '{}' line {} in styles", other, line_number),
                }
            }
            Section::Events => {
                let Some((kind, rest)) = line.trim_start().split_once(':') else {
                    continue;
                };
                let kind = kind.trim();
                if kind == "Format" {
                    event_columns = Some(resolve_columns(rest, line_number));
                    continue;
                }
                if kind != "Dialogue" && kind != "Comment" {
                    debug!("Ignoring '{}' event on line {}", kind, line_number);
                    continue;
                }

                let columns = event_columns.get_or_insert_with(default_columns);
                let fields: EventFields = parse_entity(rest.trim_start(), columns, line_number)?;
                doc.events.push(if kind == "Dialogue" {
                    Event::dialogue(fields)
                } else {
                    Event::comment(fields)
                });
            }
            Section::Preamble | Section::Other(_) => {}
        }
    }

    debug!("Parsed {}", doc);
    Ok(doc)
}

/// Read and parse an ASS file from disk
pub fn load_ass_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = FileManager::read_subtitle_file(path)?;
    parse_ass(&content)
        .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))
}

fn format_line<F: EntityField>() -> String {
    F::ALL
        .iter()
        .map(|field| field.external_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn data_line<T: FieldSet>(entity: &T) -> String {
    T::Field::ALL
        .iter()
        .map(|&field| entity.get(field).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize a document in ASS format
pub fn write_ass<W: Write>(doc: &Document, out: &mut W) -> Result<(), SubtitleError> {
    writeln!(out, "[Script Info]")?;
    for (key, value) in doc.info.iter() {
        writeln!(out, "{}: {}", key, value)?;
    }
    writeln!(out)?;

    writeln!(out, "[V4+ Styles]")?;
    writeln!(out, "Format: {}", format_line::<StyleField>())?;
    for style in &doc.styles {
        writeln!(out, "Style: {}", data_line(style))?;
    }
    writeln!(out)?;

    writeln!(out, "[Events]")?;
    writeln!(out, "Format: {}", format_line::<EventField>())?;
    for event in &doc.events {
        writeln!(out, "{}: {}", event.type_name(), data_line(event.fields()))?;
    }

    out.flush()?;
    Ok(())
}

/// Serialize a document in ASS format into a string
pub fn to_ass_string(doc: &Document) -> Result<String, SubtitleError> {
    let mut buffer = Vec::new();
    write_ass(doc, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
