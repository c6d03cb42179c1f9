use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl LegendPosition {
    /// Global position set, in the order the selector lists them.
    pub const ALL: [LegendPosition; 4] = [
        LegendPosition::Left,
        LegendPosition::Right,
        LegendPosition::Top,
        LegendPosition::Bottom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left of the chart",
            Self::Right => "Right of the chart",
            Self::Top => "Above the chart",
            Self::Bottom => "Below the chart",
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability descriptor for one chart type.
///
/// Profiles are configuration data built once at startup. Per-document data
/// (the series list) travels separately as [`SeriesMeta`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTypeProfile {
    pub id: String,
    pub display_name: String,
    pub library: String,
    pub supports_animation: bool,
    pub legend_positions: Vec<LegendPosition>,
    /// Whether series beyond the category column get their own subsection.
    pub series_settings: bool,
    pub manual_config_mode: bool,
    pub has_axes: bool,
    /// Asset identifiers the host must load before drawing this chart type.
    pub required_assets: Vec<String>,
}

impl ChartTypeProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, library: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            library: library.into(),
            supports_animation: false,
            legend_positions: LegendPosition::ALL.to_vec(),
            series_settings: true,
            manual_config_mode: false,
            has_axes: false,
            required_assets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    #[must_use]
    pub fn with_animation(mut self, supported: bool) -> Self {
        self.supports_animation = supported;
        self
    }

    #[must_use]
    pub fn with_legend_positions(mut self, positions: impl Into<Vec<LegendPosition>>) -> Self {
        self.legend_positions = positions.into();
        self
    }

    #[must_use]
    pub fn with_series_settings(mut self, enabled: bool) -> Self {
        self.series_settings = enabled;
        self
    }

    #[must_use]
    pub fn with_manual_config_mode(mut self, enabled: bool) -> Self {
        self.manual_config_mode = enabled;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, has_axes: bool) -> Self {
        self.has_axes = has_axes;
        self
    }

    #[must_use]
    pub fn with_required_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_assets = assets.into_iter().map(Into::into).collect();
        self
    }

    /// Legend positions offered by the selector: the profile's set
    /// intersected with the global set, in global order.
    #[must_use]
    pub fn offered_legend_positions(&self) -> Vec<LegendPosition> {
        LegendPosition::ALL
            .into_iter()
            .filter(|position| self.legend_positions.contains(position))
            .collect()
    }
}

/// Caller-supplied metadata for one data series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    #[serde(default)]
    pub label: Option<String>,
}

impl SeriesMeta {
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    #[must_use]
    pub fn unlabeled() -> Self {
        Self { label: None }
    }

    /// Display label, or `None` when blank. Blank series get no subsection.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.trim().is_empty())
    }
}
