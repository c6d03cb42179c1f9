use tracing::debug;

use crate::core::{Schema, SeriesMeta, ValueTree};
use crate::error::SettingsResult;
use crate::render::{Renderer, SettingsFrame};

use super::binder::{self, BindOutcome, SubmittedValues};
use super::{ProfileRegistry, SettingsEngineConfig};

/// Main facade consumed by host applications.
///
/// `SettingsEngine` owns the chart-type registry and a view renderer. Every
/// call works on explicitly passed values, so one engine can serve any
/// number of documents.
pub struct SettingsEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: SettingsEngineConfig,
    pub(super) registry: ProfileRegistry,
}

impl<R: Renderer> SettingsEngine<R> {
    /// Composes the visible schema for `chart_type`.
    pub fn render(
        &self,
        chart_type: &str,
        series: &[SeriesMeta],
        values: &ValueTree,
    ) -> SettingsResult<Schema> {
        self.registry
            .entry(chart_type)?
            .composer()
            .render(series, values)
    }

    /// Composes the schema, builds its widget frame and hands it to the renderer.
    pub fn render_form(
        &mut self,
        chart_type: &str,
        series: &[SeriesMeta],
        values: &ValueTree,
    ) -> SettingsResult<SettingsFrame> {
        let schema = self.render(chart_type, series, values)?;
        let frame = SettingsFrame::build(&schema, values);
        self.renderer.render(&frame)?;
        Ok(frame)
    }

    /// Binds a submission against the schema `chart_type` shows for the
    /// previous values. Stored keys outside that schema are pruned.
    pub fn bind(
        &self,
        chart_type: &str,
        series: &[SeriesMeta],
        submitted: &SubmittedValues,
        previous: &ValueTree,
    ) -> SettingsResult<BindOutcome> {
        let schema = self.render(chart_type, series, previous)?;
        let outcome = binder::bind(&schema, submitted, previous);
        if !outcome.pruned.is_empty() {
            debug!(
                chart_type,
                pruned = ?outcome.pruned,
                "dropped settings not shown for chart type"
            );
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
