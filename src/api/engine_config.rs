use serde::{Deserialize, Serialize};

use crate::core::{
    ChartTypeProfile, Field, FieldConstraints, FieldKind, FieldValue, LegendPosition, Visibility,
};
use crate::error::{SettingsError, SettingsResult};
use crate::extensions::GalleryConfig;

use super::builtin_profiles::CHARTJS_LIBRARY;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart-type declarations beside their other
/// configuration instead of in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsEngineConfig {
    #[serde(default = "default_library")]
    pub library: String,
    #[serde(default = "default_include_builtin_profiles")]
    pub include_builtin_profiles: bool,
    #[serde(default)]
    pub profiles: Vec<ProfileSpec>,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Default for SettingsEngineConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            include_builtin_profiles: default_include_builtin_profiles(),
            profiles: Vec::new(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl SettingsEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> SettingsResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SettingsError::InvalidConfig(format!("failed to parse engine config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> SettingsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SettingsError::InvalidConfig(format!("failed to serialize engine config: {e}"))
        })
    }

    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    /// Skips the built-in ChartJS chart types.
    #[must_use]
    pub fn without_builtin_profiles(mut self) -> Self {
        self.include_builtin_profiles = false;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ProfileSpec) -> Self {
        self.profiles.push(profile);
        self
    }

    #[must_use]
    pub fn with_gallery(mut self, gallery: GalleryConfig) -> Self {
        self.gallery = gallery;
        self
    }
}

/// Chart type declared as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub library: Option<String>,
    #[serde(default)]
    pub supports_animation: bool,
    #[serde(default = "default_legend_positions")]
    pub legend_positions: Vec<LegendPosition>,
    #[serde(default = "default_series_settings")]
    pub series_settings: bool,
    #[serde(default)]
    pub manual_config_mode: bool,
    #[serde(default)]
    pub has_axes: bool,
    #[serde(default)]
    pub required_assets: Vec<String>,
    #[serde(default = "default_hook_set")]
    pub hooks: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ProfileSpec {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            library: None,
            supports_animation: false,
            legend_positions: default_legend_positions(),
            series_settings: default_series_settings(),
            manual_config_mode: false,
            has_axes: false,
            required_assets: Vec::new(),
            hooks: default_hook_set(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: impl Into<String>) -> Self {
        self.hooks = hooks.into();
        self
    }

    #[must_use]
    pub fn with_animation(mut self, supported: bool) -> Self {
        self.supports_animation = supported;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn to_profile(&self, default_library: &str) -> ChartTypeProfile {
        ChartTypeProfile::new(
            self.id.clone(),
            self.library.as_deref().unwrap_or(default_library),
        )
        .with_display_name(self.display_name.as_deref().unwrap_or(&self.id))
        .with_animation(self.supports_animation)
        .with_legend_positions(self.legend_positions.clone())
        .with_series_settings(self.series_settings)
        .with_manual_config_mode(self.manual_config_mode)
        .with_axes(self.has_axes)
        .with_required_assets(self.required_assets.iter().cloned())
    }

    pub(crate) fn extra_fields(&self) -> SettingsResult<Vec<Field>> {
        self.fields.iter().map(FieldSpec::to_field).collect()
    }
}

/// Field declared in configuration. `kind` is checked against the catalog
/// at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_value: Option<FieldValue>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub visible_if: Visibility,
    #[serde(default)]
    pub constraints: FieldConstraints,
}

impl FieldSpec {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: label.into(),
            description: None,
            default_value: None,
            placeholder: None,
            visible_if: Visibility::Always,
            constraints: FieldConstraints::default(),
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn to_field(&self) -> SettingsResult<Field> {
        let kind: FieldKind = self.kind.parse()?;
        let mut field = Field::new(self.id.clone(), kind, self.label.clone());
        field.description = self.description.clone();
        field.default_value = self.default_value.clone();
        field.placeholder = self.placeholder.clone();
        field.visible_if = self.visible_if;
        field.constraints = self.constraints.clone();
        Ok(field)
    }
}

fn default_library() -> String {
    CHARTJS_LIBRARY.to_owned()
}

fn default_include_builtin_profiles() -> bool {
    true
}

fn default_legend_positions() -> Vec<LegendPosition> {
    LegendPosition::ALL.to_vec()
}

fn default_series_settings() -> bool {
    true
}

fn default_hook_set() -> String {
    "default".to_owned()
}
