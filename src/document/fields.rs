/*!
 * Static field lists for events and styles.
 *
 * Every entity exposes its attributes through an explicit enumerated field
 * list with typed accessors. The entity copier and the ASS reader/writer walk
 * these lists instead of discovering attributes at runtime.
 */

use crate::document::model::{Color, EventFields, FieldValue, Style, Timestamp};
use crate::errors::SchemaError;

/// The storage type behind a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
    Flag,
    Color,
    Time,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Flag => "flag",
            Self::Color => "color",
            Self::Time => "time",
        }
    }

    /// Parse the raw text of an ASS column into a value of this kind.
    ///
    /// Returns `None` when the text is not a valid value of the kind.
    pub fn parse(self, raw: &str) -> Option<FieldValue> {
        let trimmed = raw.trim();
        match self {
            Self::Text => Some(FieldValue::Text(raw.to_string())),
            Self::Integer => trimmed.parse().ok().map(FieldValue::Integer),
            Self::Number => trimmed.parse().ok().map(FieldValue::Number),
            Self::Flag => trimmed
                .parse::<i32>()
                .ok()
                .map(|value| FieldValue::Flag(value != 0)),
            Self::Color => Color::parse(trimmed).ok().map(FieldValue::Color),
            Self::Time => Timestamp::parse(trimmed).ok().map(FieldValue::Time),
        }
    }
}

/// A field of some entity type, with both of its names
pub trait EntityField: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Every field, in standard ASS column order
    const ALL: &'static [Self];

    /// Name used by the ASS format (`MarginL`, `PrimaryColour`)
    fn external_name(self) -> &'static str;

    /// Name of the attribute in this crate's model (`margin_l`, `primary_color`)
    fn canonical_name(self) -> &'static str;

    fn kind(self) -> FieldKind;

    fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.canonical_name() == name)
    }
}

/// Typed read/write access to an entity's attributes
pub trait FieldSet: Default {
    type Field: EntityField;

    fn get(&self, field: Self::Field) -> FieldValue;

    /// Assign a value; the value's kind must match the field's kind
    fn set(&mut self, field: Self::Field, value: FieldValue) -> Result<(), SchemaError>;

    /// Every attribute that carries a value, keyed by its external name
    fn populated_fields(&self) -> Vec<(&'static str, FieldValue)> {
        Self::Field::ALL
            .iter()
            .map(|&field| (field.external_name(), self.get(field)))
            .collect()
    }
}

fn mismatch<F: EntityField>(field: F, value: &FieldValue) -> SchemaError {
    SchemaError::KindMismatch {
        field: field.canonical_name(),
        expected: field.kind().name(),
        found: value.kind_name(),
    }
}

fn into_text<F: EntityField>(field: F, value: FieldValue) -> Result<String, SchemaError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(mismatch(field, &other)),
    }
}

fn into_integer<F: EntityField>(field: F, value: FieldValue) -> Result<i32, SchemaError> {
    match value {
        FieldValue::Integer(number) => Ok(number),
        other => Err(mismatch(field, &other)),
    }
}

fn into_number<F: EntityField>(field: F, value: FieldValue) -> Result<f64, SchemaError> {
    match value {
        FieldValue::Number(number) => Ok(number),
        other => Err(mismatch(field, &other)),
    }
}

fn into_flag<F: EntityField>(field: F, value: FieldValue) -> Result<bool, SchemaError> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        other => Err(mismatch(field, &other)),
    }
}

fn into_color<F: EntityField>(field: F, value: FieldValue) -> Result<Color, SchemaError> {
    match value {
        FieldValue::Color(color) => Ok(color),
        other => Err(mismatch(field, &other)),
    }
}

fn into_time<F: EntityField>(field: F, value: FieldValue) -> Result<Timestamp, SchemaError> {
    match value {
        FieldValue::Time(time) => Ok(time),
        other => Err(mismatch(field, &other)),
    }
}

/// Columns of a `Dialogue:` or `Comment:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Layer,
    Start,
    End,
    Style,
    Name,
    MarginL,
    MarginR,
    MarginV,
    Effect,
    Text,
}

impl EntityField for EventField {
    const ALL: &'static [Self] = &[
        Self::Layer,
        Self::Start,
        Self::End,
        Self::Style,
        Self::Name,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Effect,
        Self::Text,
    ];

    fn external_name(self) -> &'static str {
        match self {
            Self::Layer => "Layer",
            Self::Start => "Start",
            Self::End => "End",
            Self::Style => "Style",
            Self::Name => "Name",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Effect => "Effect",
            Self::Text => "Text",
        }
    }

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Layer => "layer",
            Self::Start => "start",
            Self::End => "end",
            Self::Style => "style",
            Self::Name => "name",
            Self::MarginL => "margin_l",
            Self::MarginR => "margin_r",
            Self::MarginV => "margin_v",
            Self::Effect => "effect",
            Self::Text => "text",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Layer | Self::MarginL | Self::MarginR | Self::MarginV => FieldKind::Integer,
            Self::Start | Self::End => FieldKind::Time,
            Self::Style | Self::Name | Self::Effect | Self::Text => FieldKind::Text,
        }
    }
}

impl FieldSet for EventFields {
    type Field = EventField;

    fn get(&self, field: EventField) -> FieldValue {
        match field {
            EventField::Layer => FieldValue::Integer(self.layer),
            EventField::Start => FieldValue::Time(self.start),
            EventField::End => FieldValue::Time(self.end),
            EventField::Style => FieldValue::Text(self.style.clone()),
            EventField::Name => FieldValue::Text(self.name.clone()),
            EventField::MarginL => FieldValue::Integer(self.margin_l),
            EventField::MarginR => FieldValue::Integer(self.margin_r),
            EventField::MarginV => FieldValue::Integer(self.margin_v),
            EventField::Effect => FieldValue::Text(self.effect.clone()),
            EventField::Text => FieldValue::Text(self.text.clone()),
        }
    }

    fn set(&mut self, field: EventField, value: FieldValue) -> Result<(), SchemaError> {
        match field {
            EventField::Layer => self.layer = into_integer(field, value)?,
            EventField::Start => self.start = into_time(field, value)?,
            EventField::End => self.end = into_time(field, value)?,
            EventField::Style => self.style = into_text(field, value)?,
            EventField::Name => self.name = into_text(field, value)?,
            EventField::MarginL => self.margin_l = into_integer(field, value)?,
            EventField::MarginR => self.margin_r = into_integer(field, value)?,
            EventField::MarginV => self.margin_v = into_integer(field, value)?,
            EventField::Effect => self.effect = into_text(field, value)?,
            EventField::Text => self.text = into_text(field, value)?,
        }
        Ok(())
    }
}

/// Columns of a `Style:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleField {
    Name,
    Fontname,
    Fontsize,
    PrimaryColour,
    SecondaryColour,
    OutlineColour,
    BackColour,
    Bold,
    Italic,
    Underline,
    StrikeOut,
    ScaleX,
    ScaleY,
    Spacing,
    Angle,
    BorderStyle,
    Outline,
    Shadow,
    Alignment,
    MarginL,
    MarginR,
    MarginV,
    Encoding,
}

impl EntityField for StyleField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Fontname,
        Self::Fontsize,
        Self::PrimaryColour,
        Self::SecondaryColour,
        Self::OutlineColour,
        Self::BackColour,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeOut,
        Self::ScaleX,
        Self::ScaleY,
        Self::Spacing,
        Self::Angle,
        Self::BorderStyle,
        Self::Outline,
        Self::Shadow,
        Self::Alignment,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Encoding,
    ];

    fn external_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Fontname => "Fontname",
            Self::Fontsize => "Fontsize",
            Self::PrimaryColour => "PrimaryColour",
            Self::SecondaryColour => "SecondaryColour",
            Self::OutlineColour => "OutlineColour",
            Self::BackColour => "BackColour",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::StrikeOut => "StrikeOut",
            Self::ScaleX => "ScaleX",
            Self::ScaleY => "ScaleY",
            Self::Spacing => "Spacing",
            Self::Angle => "Angle",
            Self::BorderStyle => "BorderStyle",
            Self::Outline => "Outline",
            Self::Shadow => "Shadow",
            Self::Alignment => "Alignment",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Encoding => "Encoding",
        }
    }

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Fontname => "fontname",
            Self::Fontsize => "fontsize",
            Self::PrimaryColour => "primary_color",
            Self::SecondaryColour => "secondary_color",
            Self::OutlineColour => "outline_color",
            Self::BackColour => "back_color",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::StrikeOut => "strike_out",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::Spacing => "spacing",
            Self::Angle => "angle",
            Self::BorderStyle => "border_style",
            Self::Outline => "outline",
            Self::Shadow => "shadow",
            Self::Alignment => "alignment",
            Self::MarginL => "margin_l",
            Self::MarginR => "margin_r",
            Self::MarginV => "margin_v",
            Self::Encoding => "encoding",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Fontname => FieldKind::Text,
            Self::Fontsize
            | Self::ScaleX
            | Self::ScaleY
            | Self::Spacing
            | Self::Angle
            | Self::Outline
            | Self::Shadow => FieldKind::Number,
            Self::PrimaryColour
            | Self::SecondaryColour
            | Self::OutlineColour
            | Self::BackColour => {
                FieldKind::Color
            }
            Self::Bold | Self::Italic | Self::Underline | Self::StrikeOut => FieldKind::Flag,
            Self::BorderStyle
            | Self::Alignment
            | Self::MarginL
            | Self::MarginR
            | Self::MarginV
            | Self::Encoding => FieldKind::Integer,
        }
    }
}

impl FieldSet for Style {
    type Field = StyleField;

    fn get(&self, field: StyleField) -> FieldValue {
        match field {
            StyleField::Name => FieldValue::Text(self.name.clone()),
            StyleField::Fontname => FieldValue::Text(self.fontname.clone()),
            StyleField::Fontsize => FieldValue::Number(self.fontsize),
            StyleField::PrimaryColour => FieldValue::Color(self.primary_color),
            StyleField::SecondaryColour => FieldValue::Color(self.secondary_color),
            StyleField::OutlineColour => FieldValue::Color(self.outline_color),
            StyleField::BackColour => FieldValue::Color(self.back_color),
            StyleField::Bold => FieldValue::Flag(self.bold),
            StyleField::Italic => FieldValue::Flag(self.italic),
            StyleField::Underline => FieldValue::Flag(self.underline),
            StyleField::StrikeOut => FieldValue::Flag(self.strike_out),
            StyleField::ScaleX => FieldValue::Number(self.scale_x),
            StyleField::ScaleY => FieldValue::Number(self.scale_y),
            StyleField::Spacing => FieldValue::Number(self.spacing),
            StyleField::Angle => FieldValue::Number(self.angle),
            StyleField::BorderStyle => FieldValue::Integer(self.border_style),
            StyleField::Outline => FieldValue::Number(self.outline),
            StyleField::Shadow => FieldValue::Number(self.shadow),
            StyleField::Alignment => FieldValue::Integer(self.alignment),
            StyleField::MarginL => FieldValue::Integer(self.margin_l),
            StyleField::MarginR => FieldValue::Integer(self.margin_r),
            StyleField::MarginV => FieldValue::Integer(self.margin_v),
            StyleField::Encoding => FieldValue::Integer(self.encoding),
        }
    }

    fn set(&mut self, field: StyleField, value: FieldValue) -> Result<(), SchemaError> {
        match field {
            StyleField::Name => self.name = into_text(field, value)?,
            StyleField::Fontname => self.fontname = into_text(field, value)?,
            StyleField::Fontsize => self.fontsize = into_number(field, value)?,
            StyleField::PrimaryColour => self.primary_color = into_color(field, value)?,
            StyleField::SecondaryColour => self.secondary_color = into_color(field, value)?,
            StyleField::OutlineColour => self.outline_color = into_color(field, value)?,
            StyleField::BackColour => self.back_color = into_color(field, value)?,
            StyleField::Bold => self.bold = into_flag(field, value)?,
            StyleField::Italic => self.italic = into_flag(field, value)?,
            StyleField::Underline => self.underline = into_flag(field, value)?,
            StyleField::StrikeOut => self.strike_out = into_flag(field, value)?,
            StyleField::ScaleX => self.scale_x = into_number(field, value)?,
            StyleField::ScaleY => self.scale_y = into_number(field, value)?,
            StyleField::Spacing => self.spacing = into_number(field, value)?,
            StyleField::Angle => self.angle = into_number(field, value)?,
            StyleField::BorderStyle => self.border_style = into_integer(field, value)?,
            StyleField::Outline => self.outline = into_number(field, value)?,
            StyleField::Shadow => self.shadow = into_number(field, value)?,
            StyleField::Alignment => self.alignment = into_integer(field, value)?,
            StyleField::MarginL => self.margin_l = into_integer(field, value)?,
            StyleField::MarginR => self.margin_r = into_integer(field, value)?,
            StyleField::MarginV => self.margin_v = into_integer(field, value)?,
            StyleField::Encoding => self.encoding = into_integer(field, value)?,
        }
        Ok(())
    }
}
