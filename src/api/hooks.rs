use std::fmt;

use thiserror::Error;

use crate::core::{ChartTypeProfile, Field, Section, ValueTree};

use super::base_sections;

/// Failure reported by a variant hook. The composer treats it as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HookError(pub String);

pub type HookResult<T> = Result<T, HookError>;

/// Sections inserted into the chart-type-specific group.
pub type ChartTypeSettingsHook = fn(&ChartTypeProfile, &ValueTree) -> HookResult<Vec<Section>>;

/// Extra fields appended to one per-series subsection. Receives the storage
/// index of the series (`0` is the first series after the category column).
pub type ChartTypeSeriesHook =
    fn(&ChartTypeProfile, usize, &ValueTree) -> HookResult<Vec<Field>>;

/// Animation section. Only invoked when the profile supports animation.
pub type AnimationSettingsHook = fn(&ChartTypeProfile, &ValueTree) -> HookResult<Option<Section>>;

/// The three extension points a chart type may override.
///
/// Hooks must be pure functions of their arguments.
#[derive(Clone, Copy)]
pub struct ChartTypeHooks {
    pub name: &'static str,
    pub chart_type_settings: ChartTypeSettingsHook,
    pub chart_type_series: ChartTypeSeriesHook,
    pub animation_settings: AnimationSettingsHook,
}

impl ChartTypeHooks {
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            chart_type_settings: no_chart_type_settings,
            chart_type_series: no_chart_type_series,
            animation_settings: default_animation_settings,
        }
    }

    #[must_use]
    pub const fn with_chart_type_settings(mut self, hook: ChartTypeSettingsHook) -> Self {
        self.chart_type_settings = hook;
        self
    }

    #[must_use]
    pub const fn with_chart_type_series(mut self, hook: ChartTypeSeriesHook) -> Self {
        self.chart_type_series = hook;
        self
    }

    #[must_use]
    pub const fn with_animation_settings(mut self, hook: AnimationSettingsHook) -> Self {
        self.animation_settings = hook;
        self
    }
}

impl Default for ChartTypeHooks {
    fn default() -> Self {
        Self::named("default")
    }
}

impl fmt::Debug for ChartTypeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartTypeHooks")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn no_chart_type_settings(_: &ChartTypeProfile, _: &ValueTree) -> HookResult<Vec<Section>> {
    Ok(Vec::new())
}

fn no_chart_type_series(_: &ChartTypeProfile, _: usize, _: &ValueTree) -> HookResult<Vec<Field>> {
    Ok(Vec::new())
}

fn default_animation_settings(_: &ChartTypeProfile, _: &ValueTree) -> HookResult<Option<Section>> {
    Ok(Some(base_sections::animation_section()))
}
