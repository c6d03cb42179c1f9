use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SettingsError;

use super::FieldValue;

/// Font families offered by every "family and size" control pair.
/// Pairs are `(stored value, display label)`.
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Arial", "Arial"),
    ("Sans Serif", "Sans Serif"),
    ("serif", "Serif"),
    ("Arial black", "Wide"),
    ("Arial Narrow", "Narrow"),
    ("Comic Sans MS", "Comic Sans MS"),
    ("Courier New", "Courier New"),
    ("Garamond", "Garamond"),
    ("Georgia", "Georgia"),
    ("Tahoma", "Tahoma"),
    ("Verdana", "Verdana"),
];

pub const FONT_SIZE_RANGE: RangeInclusive<u8> = 7..=20;

/// `linear` followed by the twelve eased curves the animation selector offers.
pub const EASING_CURVES: &[(&str, &str)] = &[
    ("linear", "Constant speed"),
    ("easeInQuad", "easeInQuad"),
    ("easeOutQuad", "easeOutQuad"),
    ("easeInOutQuad", "easeInOutQuad"),
    ("easeInCubic", "easeInCubic"),
    ("easeOutCubic", "easeOutCubic"),
    ("easeInOutCubic", "easeInOutCubic"),
    ("easeInQuart", "easeInQuart"),
    ("easeOutQuart", "easeOutQuart"),
    ("easeInOutQuart", "easeInOutQuart"),
    ("easeInQuint", "easeInQuint"),
    ("easeOutQuint", "easeOutQuint"),
    ("easeInOutQuint", "easeInOutQuint"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Checkbox,
    Color,
    Textarea,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Select,
        FieldKind::Checkbox,
        FieldKind::Color,
        FieldKind::Textarea,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Color => "color",
            Self::Textarea => "textarea",
        }
    }

    /// Free-text kinds accept arbitrary strings and are exempt from the
    /// parse/serialize round-trip guarantee.
    #[must_use]
    pub const fn is_free_text(self) -> bool {
        matches!(self, Self::Text | Self::Textarea)
    }

    #[must_use]
    pub fn widget(self) -> &'static dyn FieldWidget {
        match self {
            Self::Text => &TextWidget,
            Self::Number => &NumberWidget,
            Self::Select => &SelectWidget,
            Self::Checkbox => &CheckboxWidget,
            Self::Color => &ColorWidget,
            Self::Textarea => &TextareaWidget,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = SettingsError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.name() == kind)
            .ok_or_else(|| SettingsError::UnknownFieldKind {
                kind: kind.to_owned(),
            })
    }
}

/// Shape a free-text value must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPattern {
    /// A number of pixels, or a number followed by `%`.
    Dimension,
    /// A JSON object literal.
    JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: FieldValue,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub integer: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub allow_empty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<TextPattern>,
}

/// Why a submitted value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldValueError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },
    #[error("{value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },
    #[error("{0} is not a whole number")]
    NotAnInteger(f64),
    #[error("`{0}` is not one of the offered options")]
    NotAnOption(String),
    #[error("`{0}` is not a checkbox state")]
    NotABool(String),
    #[error("`{0}` is not a hex color")]
    InvalidColor(String),
    #[error("`{0}` is not a size in pixels or percent")]
    InvalidDimension(String),
    #[error("manual configuration is not a JSON object: {0}")]
    InvalidJson(String),
    #[error("a value is required")]
    Empty,
    #[error("expected a {expected} value")]
    WrongType { expected: FieldKind },
}

/// Rendering/parsing rules for one field kind.
pub trait FieldWidget: Sync {
    fn kind(&self) -> FieldKind;

    fn serialize(&self, value: &FieldValue) -> String {
        value.to_string()
    }

    fn parse(
        &self,
        raw: &str,
        constraints: &FieldConstraints,
    ) -> Result<FieldValue, FieldValueError>;

    fn validate(
        &self,
        value: &FieldValue,
        constraints: &FieldConstraints,
    ) -> Result<(), FieldValueError>;

    fn accepts(&self, value: &FieldValue, constraints: &FieldConstraints) -> bool {
        self.validate(value, constraints).is_ok()
    }

    /// Parses a raw submission and validates the result.
    fn read(&self, raw: &str, constraints: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        let value = self.parse(raw, constraints)?;
        self.validate(&value, constraints)?;
        Ok(value)
    }
}

struct TextWidget;
struct NumberWidget;
struct SelectWidget;
struct CheckboxWidget;
struct ColorWidget;
struct TextareaWidget;

impl FieldWidget for TextWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn parse(&self, raw: &str, _: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        Ok(FieldValue::text(raw.trim()))
    }

    fn validate(
        &self,
        value: &FieldValue,
        constraints: &FieldConstraints,
    ) -> Result<(), FieldValueError> {
        let text = value.as_str().ok_or(FieldValueError::WrongType {
            expected: FieldKind::Text,
        })?;
        validate_text(text, constraints)
    }
}

impl FieldWidget for TextareaWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Textarea
    }

    fn parse(&self, raw: &str, _: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        Ok(FieldValue::text(raw))
    }

    fn validate(
        &self,
        value: &FieldValue,
        constraints: &FieldConstraints,
    ) -> Result<(), FieldValueError> {
        let text = value.as_str().ok_or(FieldValueError::WrongType {
            expected: FieldKind::Textarea,
        })?;
        validate_text(text, constraints)
    }
}

fn validate_text(text: &str, constraints: &FieldConstraints) -> Result<(), FieldValueError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match constraints.pattern {
        None => Ok(()),
        Some(TextPattern::Dimension) => {
            let number = text.strip_suffix('%').unwrap_or(text);
            match number.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
                _ => Err(FieldValueError::InvalidDimension(text.to_owned())),
            }
        }
        Some(TextPattern::JsonObject) => {
            match serde_json::from_str::<serde_json::Value>(text) {
                Ok(serde_json::Value::Object(_)) => Ok(()),
                Ok(_) => Err(FieldValueError::InvalidJson("expected an object".to_owned())),
                Err(err) => Err(FieldValueError::InvalidJson(err.to_string())),
            }
        }
    }
}

impl FieldWidget for NumberWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Number
    }

    fn parse(&self, raw: &str, _: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FieldValueError::Empty);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(FieldValue::Number)
            .ok_or_else(|| FieldValueError::NotANumber(raw.to_owned()))
    }

    fn validate(
        &self,
        value: &FieldValue,
        constraints: &FieldConstraints,
    ) -> Result<(), FieldValueError> {
        let number = value.as_f64().ok_or(FieldValueError::WrongType {
            expected: FieldKind::Number,
        })?;
        validate_number(number, constraints)
    }
}

fn validate_number(value: f64, constraints: &FieldConstraints) -> Result<(), FieldValueError> {
    if !value.is_finite() {
        return Err(FieldValueError::NotANumber(value.to_string()));
    }
    if constraints.integer && value.fract() != 0.0 {
        return Err(FieldValueError::NotAnInteger(value));
    }
    if let Some(min) = constraints.min {
        if value < min {
            return Err(FieldValueError::BelowMinimum { value, min });
        }
    }
    if let Some(max) = constraints.max {
        if value > max {
            return Err(FieldValueError::AboveMaximum { value, max });
        }
    }
    Ok(())
}

impl FieldWidget for SelectWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Select
    }

    fn parse(
        &self,
        raw: &str,
        constraints: &FieldConstraints,
    ) -> Result<FieldValue, FieldValueError> {
        if raw.is_empty() && constraints.allow_empty {
            return Ok(FieldValue::text(""));
        }
        constraints
            .options
            .iter()
            .find(|option| option.value.to_string() == raw)
            .map(|option| option.value.clone())
            .ok_or_else(|| FieldValueError::NotAnOption(raw.to_owned()))
    }

    fn validate(
        &self,
        value: &FieldValue,
        constraints: &FieldConstraints,
    ) -> Result<(), FieldValueError> {
        if value.is_empty_text() && constraints.allow_empty {
            return Ok(());
        }
        if constraints.options.iter().any(|option| &option.value == value) {
            Ok(())
        } else {
            Err(FieldValueError::NotAnOption(value.to_string()))
        }
    }
}

impl FieldWidget for CheckboxWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Checkbox
    }

    fn parse(&self, raw: &str, _: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" => Ok(FieldValue::Bool(true)),
            "false" | "0" | "off" | "" => Ok(FieldValue::Bool(false)),
            _ => Err(FieldValueError::NotABool(raw.to_owned())),
        }
    }

    fn validate(&self, value: &FieldValue, _: &FieldConstraints) -> Result<(), FieldValueError> {
        value.as_bool().map(|_| ()).ok_or(FieldValueError::WrongType {
            expected: FieldKind::Checkbox,
        })
    }
}

impl FieldWidget for ColorWidget {
    fn kind(&self) -> FieldKind {
        FieldKind::Color
    }

    fn parse(&self, raw: &str, _: &FieldConstraints) -> Result<FieldValue, FieldValueError> {
        Ok(FieldValue::text(raw.trim()))
    }

    fn validate(&self, value: &FieldValue, _: &FieldConstraints) -> Result<(), FieldValueError> {
        let color = value.as_str().ok_or(FieldValueError::WrongType {
            expected: FieldKind::Color,
        })?;
        // Empty leaves the color to the charting library.
        if color.is_empty() || is_hex_color(color) {
            Ok(())
        } else {
            Err(FieldValueError::InvalidColor(color.to_owned()))
        }
    }
}

#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[must_use]
pub fn widget_for(kind: FieldKind) -> &'static dyn FieldWidget {
    kind.widget()
}

#[must_use]
pub fn font_family_options() -> Vec<SelectOption> {
    FONT_FAMILIES
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

#[must_use]
pub fn font_size_options() -> Vec<SelectOption> {
    FONT_SIZE_RANGE
        .map(|size| SelectOption::new(i64::from(size), size.to_string()))
        .collect()
}

#[must_use]
pub fn easing_options() -> Vec<SelectOption> {
    EASING_CURVES
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_parse_back() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.name().parse::<FieldKind>().expect("known kind"), kind);
        }
        assert!(matches!(
            "slider".parse::<FieldKind>(),
            Err(SettingsError::UnknownFieldKind { .. })
        ));
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#000"));
        assert!(is_hex_color("#a1B2c3"));
        assert!(is_hex_color("#a1b2c3d4"));
        assert!(!is_hex_color("000"));
        assert!(!is_hex_color("#00"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn easing_set_is_linear_plus_twelve_curves() {
        assert_eq!(EASING_CURVES.len(), 13);
        assert_eq!(EASING_CURVES[0].0, "linear");
    }
}
