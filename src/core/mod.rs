pub mod field_catalog;
pub mod field_path;
pub mod profile;
pub mod schema;
pub mod value;

pub use field_catalog::{
    EASING_CURVES, FONT_FAMILIES, FONT_SIZE_RANGE, FieldConstraints, FieldKind, FieldValueError,
    FieldWidget, SelectOption, TextPattern, easing_options, font_family_options,
    font_size_options, is_hex_color, widget_for,
};
pub use field_path::FieldPath;
pub use profile::{ChartTypeProfile, LegendPosition, SeriesMeta};
pub use schema::{Field, Group, GroupKind, Schema, Section, Visibility};
pub use value::{FieldValue, ValueTree};
