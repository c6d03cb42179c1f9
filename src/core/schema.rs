use serde::{Deserialize, Serialize};

use super::{
    ChartTypeProfile, FieldConstraints, FieldKind, FieldValue, SelectOption, TextPattern,
};

/// Visibility predicate over the chart-type profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Always,
    SupportsAnimation,
    HasAxes,
    SeriesSettings,
    ManualConfigMode,
}

impl Visibility {
    #[must_use]
    pub fn evaluate(self, profile: &ChartTypeProfile) -> bool {
        match self {
            Self::Always => true,
            Self::SupportsAnimation => profile.supports_animation,
            Self::HasAxes => profile.has_axes,
            Self::SeriesSettings => profile.series_settings,
            Self::ManualConfigMode => profile.manual_config_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub visible_if: Visibility,
    #[serde(default)]
    pub constraints: FieldConstraints,
}

impl Field {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            description: None,
            default_value: None,
            placeholder: None,
            visible_if: Visibility::Always,
            constraints: FieldConstraints::default(),
        }
    }

    #[must_use]
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text, label)
    }

    #[must_use]
    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Number, label)
    }

    #[must_use]
    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(id, FieldKind::Select, label);
        field.constraints.options = options;
        field
    }

    #[must_use]
    pub fn checkbox(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Checkbox, label).with_default(false)
    }

    #[must_use]
    pub fn color(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Color, label)
    }

    #[must_use]
    pub fn textarea(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Textarea, label)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn visible_if(mut self, visibility: Visibility) -> Self {
        self.visible_if = visibility;
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.constraints.min = min;
        self.constraints.max = max;
        self
    }

    #[must_use]
    pub fn integer(mut self) -> Self {
        self.constraints.integer = true;
        self
    }

    #[must_use]
    pub fn allow_empty(mut self) -> Self {
        self.constraints.allow_empty = true;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: TextPattern) -> Self {
        self.constraints.pattern = Some(pattern);
        self
    }

    #[must_use]
    pub fn is_visible(&self, profile: &ChartTypeProfile) -> bool {
        self.visible_if.evaluate(profile)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    #[must_use]
    pub fn with_subsection(mut self, section: Section) -> Self {
        self.subsections.push(section);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.subsections.is_empty()
    }

    /// Fields of this section followed by those of its subsections, depth-first.
    pub fn all_fields(&self) -> Box<dyn Iterator<Item = &Field> + '_> {
        Box::new(
            self.fields
                .iter()
                .chain(self.subsections.iter().flat_map(Section::all_fields)),
        )
    }
}

/// Fixed top-level groups, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    General,
    Axes,
    ChartTypeSpecific,
    Series,
    View,
    Advanced,
}

impl GroupKind {
    pub const ORDER: [GroupKind; 6] = [
        GroupKind::General,
        GroupKind::Axes,
        GroupKind::ChartTypeSpecific,
        GroupKind::Series,
        GroupKind::View,
        GroupKind::Advanced,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub kind: GroupKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Group {
    #[must_use]
    pub fn new(kind: GroupKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(Section::all_fields)
    }
}

/// Fully composed settings tree for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub groups: Vec<Group>,
}

impl Schema {
    #[must_use]
    pub fn group(&self, kind: GroupKind) -> Option<&Group> {
        self.groups.iter().find(|group| group.kind == kind)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.groups.iter().flat_map(Group::fields)
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields().find(|field| field.id == id)
    }

    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.groups
            .iter()
            .flat_map(|group| group.sections.iter())
            .find(|section| section.title == title)
    }
}
