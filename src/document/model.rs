/*!
 * Core document model types for ASS subtitles.
 *
 * A document is a bag of script metadata, an ordered list of styles and an
 * ordered list of events. Events reference styles by name only; nothing in
 * these types enforces that the reference resolves.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::errors::SubtitleError;

/// ASS timestamp regex: H:MM:SS.cc, optionally signed
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?(\d+):(\d{1,2}):(\d{1,2})(?:[.:](\d+))?$").unwrap()
});

const MICROS_PER_SECOND: i64 = 1_000_000;

/// A point on the subtitle timeline, in signed microseconds.
///
/// Negative values are legal; shifting never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(millis * 1_000)
    }

    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Move the timestamp by `offset_us` microseconds
    pub const fn shifted_by(self, offset_us: i64) -> Self {
        Timestamp(self.0.saturating_add(offset_us))
    }

    /// Parse an ASS timestamp (`H:MM:SS.cc`).
    ///
    /// The fractional part is read as a decimal fraction of a second, so
    /// `0:00:01.5` and `0:00:01.50` are the same instant. Digits past the
    /// microsecond are ignored.
    pub fn parse(text: &str) -> Result<Self, SubtitleError> {
        let invalid = || SubtitleError::InvalidTimestamp(text.to_string());
        let caps = TIMESTAMP_REGEX.captures(text.trim()).ok_or_else(invalid)?;

        let hours: i64 = caps[2].parse().map_err(|_| invalid())?;
        let minutes: i64 = caps[3].parse().map_err(|_| invalid())?;
        let seconds: i64 = caps[4].parse().map_err(|_| invalid())?;

        let micros = match caps.get(5) {
            Some(fraction) => {
                let mut digits: String = fraction.as_str().chars().take(6).collect();
                while digits.len() < 6 {
                    digits.push('0');
                }
                digits.parse::<i64>().map_err(|_| invalid())?
            }
            None => 0,
        };

        let total = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .and_then(|s| s.checked_mul(MICROS_PER_SECOND))
            .and_then(|us| us.checked_add(micros))
            .ok_or_else(invalid)?;

        Ok(if caps.get(1).is_some() { Timestamp(-total) } else { Timestamp(total) })
    }
}

impl fmt::Display for Timestamp {
    /// Formats as `H:MM:SS.cc`; precision below a centisecond is truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let micros = self.0.unsigned_abs();
        let total_seconds = micros / MICROS_PER_SECOND as u64;
        let centis = (micros % MICROS_PER_SECOND as u64) / 10_000;

        write!(
            f,
            "{}{}:{:02}:{:02}.{:02}",
            sign,
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60,
            centis
        )
    }
}

/// An RGBA color as stored in ASS style definitions.
///
/// Alpha follows ASS conventions: 0 is opaque, 255 fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 0);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Parse `&HAABBGGRR`, `&HBBGGRR&` or a plain decimal integer
    pub fn parse(text: &str) -> Result<Self, SubtitleError> {
        let invalid = || SubtitleError::InvalidColor(text.to_string());
        let trimmed = text.trim();

        let value = match trimmed.strip_prefix("&H").or_else(|| trimmed.strip_prefix("&h")) {
            Some(hex) => {
                let hex = hex.trim_end_matches('&');
                if hex.is_empty() || hex.len() > 8 {
                    return Err(invalid());
                }
                u32::from_str_radix(hex, 16).map_err(|_| invalid())?
            }
            None => {
                let decimal = trimmed.parse::<i64>().map_err(|_| invalid())?;
                match u32::try_from(decimal) {
                    Ok(value) => value,
                    // Legacy SSA files store colors as signed 32-bit integers
                    Err(_) => i32::try_from(decimal).map_err(|_| invalid())? as u32,
                }
            }
        };

        let [r, g, b, a] = value.to_le_bytes();
        Ok(Color { r, g, b, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&H{:02X}{:02X}{:02X}{:02X}", self.a, self.b, self.g, self.r)
    }
}

/// A single attribute value read from or written to an entity
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i32),
    Number(f64),
    Flag(bool),
    Color(Color),
    Time(Timestamp),
}

impl FieldValue {
    /// Short name of the value's kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Flag(_) => "flag",
            Self::Color(_) => "color",
            Self::Time(_) => "time",
        }
    }
}

impl fmt::Display for FieldValue {
    /// Renders the value the way it appears in an ASS data line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Flag(true) => f.write_str("-1"),
            Self::Flag(false) => f.write_str("0"),
            Self::Color(color) => write!(f, "{}", color),
            Self::Time(time) => write!(f, "{}", time),
        }
    }
}

/// Ordered `[Script Info]` metadata.
///
/// Keys keep their first insertion position; re-inserting a key replaces the
/// value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptInfo {
    entries: Vec<(String, String)>,
}

impl ScriptInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a key, replacing an existing value without moving it
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attributes shared by both event variants
#[derive(Debug, PartialEq, Default)]
pub struct EventFields {
    pub layer: i32,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Name of the style this event renders with
    pub style: String,
    /// Actor name
    pub name: String,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    pub effect: String,
    pub text: String,
}

/// A timed entry of the `[Events]` section
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Rendered line
    Dialogue(EventFields),
    /// Annotation, never rendered
    Comment(EventFields),
}

impl Event {
    pub fn dialogue(fields: EventFields) -> Self {
        Event::Dialogue(fields)
    }

    pub fn comment(fields: EventFields) -> Self {
        Event::Comment(fields)
    }

    /// Line prefix used in the `[Events]` section
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::Dialogue(_) => "Dialogue",
            Event::Comment(_) => "Comment",
        }
    }

    pub fn fields(&self) -> &EventFields {
        match self {
            Event::Dialogue(fields) | Event::Comment(fields) => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut EventFields {
        match self {
            Event::Dialogue(fields) | Event::Comment(fields) => fields,
        }
    }

    pub fn style(&self) -> &str {
        &self.fields().style
    }

    pub fn text(&self) -> &str {
        &self.fields().text
    }
}

/// A named formatting definition of the `[V4+ Styles]` section
#[derive(Debug, PartialEq)]
pub struct Style {
    pub name: String,
    pub fontname: String,
    pub fontsize: f64,
    pub primary_color: Color,
    pub secondary_color: Color,
    pub outline_color: Color,
    pub back_color: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    pub scale_x: f64,
    pub scale_y: f64,
    pub spacing: f64,
    pub angle: f64,
    pub border_style: i32,
    pub outline: f64,
    pub shadow: f64,
    pub alignment: i32,
    pub margin_l: i32,
    pub margin_r: i32,
    pub margin_v: i32,
    pub encoding: i32,
}

impl Style {
    /// Create a style with default attributes and the given name
    pub fn named(name: impl Into<String>) -> Self {
        Style {
            name: name.into(),
            ..Style::default()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            name: "Default".to_string(),
            fontname: "Arial".to_string(),
            fontsize: 20.0,
            primary_color: Color::WHITE,
            secondary_color: Color::rgba(255, 0, 0, 0),
            outline_color: Color::BLACK,
            back_color: Color::BLACK,
            bold: false,
            italic: false,
            underline: false,
            strike_out: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 2.0,
            alignment: 2,
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            encoding: 1,
        }
    }
}

/// A complete ASS document.
///
/// Documents are deliberately not `Clone`: duplicating one goes through the
/// entity copier so every copy is built field by field.
#[derive(Debug, PartialEq, Default)]
pub struct Document {
    /// `[Script Info]` metadata
    pub info: ScriptInfo,

    /// `[V4+ Styles]` definitions, in file order
    pub styles: Vec<Style>,

    /// `[Events]` entries, in file order
    pub events: Vec<Event>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document(events={}, styles={})",
            self.events.len(),
            self.styles.len()
        )
    }
}
