use std::collections::HashSet;

use serde::Serialize;

use crate::core::{Field, FieldKind, Schema, Section, ValueTree};
use crate::error::{SettingsError, SettingsResult};

/// One selectable entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// View-independent description of one widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    /// Submission name, identical to the field id.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Current value serialized for the widget. Empty when unset.
    pub value: String,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub options: Vec<ControlOption>,
    /// Select controls that also offer a blank choice.
    pub allow_empty: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Control {
    #[must_use]
    pub fn from_field(field: &Field, values: &ValueTree) -> Self {
        let widget = field.kind.widget();
        let value = values
            .get(&field.id)
            .or(field.default_value.as_ref())
            .map(|value| widget.serialize(value))
            .unwrap_or_default();

        let options = field
            .constraints
            .options
            .iter()
            .map(|option| {
                let option_value = widget.serialize(&option.value);
                ControlOption {
                    selected: option_value == value,
                    value: option_value,
                    label: option.label.clone(),
                }
            })
            .collect();

        Self {
            name: field.id.clone(),
            label: field.label.clone(),
            kind: field.kind,
            value,
            placeholder: field.placeholder.clone(),
            description: field.description.clone(),
            options,
            allow_empty: field.constraints.allow_empty,
            min: field.constraints.min,
            max: field.constraints.max,
        }
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&ControlOption> {
        self.options.iter().find(|option| option.selected)
    }

    /// Checkbox state. `None` for other control kinds.
    #[must_use]
    pub fn is_checked(&self) -> Option<bool> {
        (self.kind == FieldKind::Checkbox).then(|| self.value == "true")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    pub title: String,
    pub collapsible: bool,
    pub description: Option<String>,
    pub controls: Vec<Control>,
    pub subsections: Vec<SectionFrame>,
}

impl SectionFrame {
    fn build(section: &Section, values: &ValueTree) -> Self {
        Self {
            title: section.title.clone(),
            collapsible: section.collapsible,
            description: section.description.clone(),
            controls: section
                .fields
                .iter()
                .map(|field| Control::from_field(field, values))
                .collect(),
            subsections: section
                .subsections
                .iter()
                .map(|subsection| Self::build(subsection, values))
                .collect(),
        }
    }

    fn controls_recursive(&self) -> Box<dyn Iterator<Item = &Control> + '_> {
        Box::new(
            self.controls
                .iter()
                .chain(self.subsections.iter().flat_map(Self::controls_recursive)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupFrame {
    pub title: String,
    pub description: Option<String>,
    pub sections: Vec<SectionFrame>,
}

/// Widget tree for one settings form, a pure function of schema and values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsFrame {
    pub groups: Vec<GroupFrame>,
}

impl SettingsFrame {
    #[must_use]
    pub fn build(schema: &Schema, values: &ValueTree) -> Self {
        Self {
            groups: schema
                .groups
                .iter()
                .map(|group| GroupFrame {
                    title: group.title.clone(),
                    description: group.description.clone(),
                    sections: group
                        .sections
                        .iter()
                        .map(|section| SectionFrame::build(section, values))
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.groups
            .iter()
            .flat_map(|group| group.sections.iter())
            .flat_map(SectionFrame::controls_recursive)
    }

    #[must_use]
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls().find(|control| control.name == name)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let mut names = HashSet::new();
        for control in self.controls() {
            if control.name.is_empty() {
                return Err(SettingsError::InvalidData(
                    "control name must not be empty".to_owned(),
                ));
            }
            if !names.insert(control.name.as_str()) {
                return Err(SettingsError::InvalidData(format!(
                    "control `{}` appears more than once",
                    control.name
                )));
            }
            if control.kind == FieldKind::Select && control.options.is_empty() {
                return Err(SettingsError::InvalidData(format!(
                    "select control `{}` has no options",
                    control.name
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
