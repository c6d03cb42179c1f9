use std::collections::HashSet;

use tracing::{debug, trace};

use crate::core::{
    ChartTypeProfile, Field, FieldPath, Group, GroupKind, Schema, Section, SeriesMeta, ValueTree,
};
use crate::error::{SettingsError, SettingsResult};

use super::base_sections;
use super::hooks::{ChartTypeHooks, HookError};

/// Builds the visible settings tree for one chart type.
///
/// The base ordering is fixed: General, Axes, ChartTypeSpecific, Series, View,
/// Advanced. Variant behavior enters only through the three hooks.
#[derive(Debug, Clone, Copy)]
pub struct SettingsComposer<'a> {
    profile: &'a ChartTypeProfile,
    hooks: &'a ChartTypeHooks,
    extra_fields: &'a [Field],
}

impl<'a> SettingsComposer<'a> {
    #[must_use]
    pub fn new(profile: &'a ChartTypeProfile, hooks: &'a ChartTypeHooks) -> Self {
        Self {
            profile,
            hooks,
            extra_fields: &[],
        }
    }

    /// Fields declared for this chart type in configuration rather than code.
    #[must_use]
    pub fn with_extra_fields(mut self, fields: &'a [Field]) -> Self {
        self.extra_fields = fields;
        self
    }

    #[must_use]
    pub fn profile(&self) -> &'a ChartTypeProfile {
        self.profile
    }

    pub fn render(&self, series: &[SeriesMeta], values: &ValueTree) -> SettingsResult<Schema> {
        let mut groups = Vec::with_capacity(GroupKind::ORDER.len());
        for kind in GroupKind::ORDER {
            let group = self.base_group(kind, series, values)?;
            if let Some(group) = self.retain_visible(group) {
                groups.push(group);
            }
        }

        let mut schema = Schema { groups };
        self.canonicalize_ids(&mut schema)?;

        debug!(
            chart_type = %self.profile.id,
            groups = schema.groups.len(),
            fields = schema.fields().count(),
            "composed settings schema"
        );
        Ok(schema)
    }

    fn base_group(
        &self,
        kind: GroupKind,
        series: &[SeriesMeta],
        values: &ValueTree,
    ) -> SettingsResult<Group> {
        let group = match kind {
            GroupKind::General => self.general_group(values)?,
            GroupKind::Axes => base_sections::axes_sections()
                .into_iter()
                .fold(Group::new(kind, "Axes Settings"), Group::with_section),
            GroupKind::ChartTypeSpecific => self.chart_type_group(values)?,
            GroupKind::Series => self.series_group(series, values)?,
            GroupKind::View => Group::new(kind, "Layout & Chart Area")
                .with_section(base_sections::layout_section())
                .with_section(base_sections::chart_area_section()),
            GroupKind::Advanced => Group::new(kind, "Advanced Settings")
                .with_section(base_sections::manual_config_section()),
        };
        Ok(group)
    }

    fn general_group(&self, values: &ValueTree) -> SettingsResult<Group> {
        let mut group = Group::new(GroupKind::General, "General Settings")
            .with_description(
                "Configure title, font styles, tooltip, legend and else settings for the chart.",
            )
            .with_section(base_sections::title_section())
            .with_section(base_sections::font_styles_section())
            .with_section(base_sections::legend_section(self.profile))
            .with_section(base_sections::tooltip_section());

        if self.profile.supports_animation {
            let section = (self.hooks.animation_settings)(self.profile, values)
                .map_err(|err| self.hook_failed("animation_settings", err))?;
            group.sections.extend(section);
        }
        Ok(group)
    }

    fn chart_type_group(&self, values: &ValueTree) -> SettingsResult<Group> {
        let sections = (self.hooks.chart_type_settings)(self.profile, values)
            .map_err(|err| self.hook_failed("chart_type_settings", err))?;

        let mut group = Group::new(
            GroupKind::ChartTypeSpecific,
            format!("{} Settings", self.profile.display_name),
        );
        group.sections = sections;
        if !self.extra_fields.is_empty() {
            group.sections.push(
                Section::new("Additional Settings").with_fields(self.extra_fields.iter().cloned()),
            );
        }
        Ok(group)
    }

    /// One subsection per labelled series after the first. The first series
    /// is the category column and never gets its own settings.
    fn series_group(&self, series: &[SeriesMeta], values: &ValueTree) -> SettingsResult<Group> {
        let mut container = Section::new("Series");
        if !self.profile.series_settings {
            return Ok(Group::new(GroupKind::Series, "Series Settings").with_section(container));
        }
        for (position, meta) in series.iter().enumerate().skip(1) {
            let Some(label) = meta.display_label() else {
                trace!(position, "skipping unlabeled series");
                continue;
            };
            let index = position - 1;
            let extra = (self.hooks.chart_type_series)(self.profile, index, values)
                .map_err(|err| self.hook_failed("chart_type_series", err))?;
            container.subsections.push(
                Section::new(label)
                    .with_field(base_sections::series_format_field(index))
                    .with_fields(extra),
            );
        }
        Ok(Group::new(GroupKind::Series, "Series Settings").with_section(container))
    }

    fn retain_visible(&self, mut group: Group) -> Option<Group> {
        group.sections = group
            .sections
            .into_iter()
            .filter_map(|section| self.retain_visible_section(section))
            .collect();
        (!group.sections.is_empty()).then_some(group)
    }

    fn retain_visible_section(&self, mut section: Section) -> Option<Section> {
        section.fields.retain(|field| field.is_visible(self.profile));
        section.subsections = section
            .subsections
            .into_iter()
            .filter_map(|subsection| self.retain_visible_section(subsection))
            .collect();
        if section.is_empty() {
            trace!(section = %section.title, "omitting section without visible fields");
            return None;
        }
        Some(section)
    }

    fn canonicalize_ids(&self, schema: &mut Schema) -> SettingsResult<()> {
        let mut seen = HashSet::new();
        for group in &mut schema.groups {
            for section in &mut group.sections {
                canonicalize_section(section, &mut seen, &self.profile.id)?;
            }
        }
        Ok(())
    }

    fn hook_failed(&self, hook: &'static str, err: HookError) -> SettingsError {
        SettingsError::HookFailed {
            chart_type: self.profile.id.clone(),
            hook,
            message: err.0,
        }
    }
}

fn canonicalize_section(
    section: &mut Section,
    seen: &mut HashSet<String>,
    chart_type: &str,
) -> SettingsResult<()> {
    for field in &mut section.fields {
        field.id = FieldPath::canonicalize(&field.id)?;
        if !seen.insert(field.id.clone()) {
            return Err(SettingsError::DuplicateFieldId {
                chart_type: chart_type.to_owned(),
                id: field.id.clone(),
            });
        }
    }
    for subsection in &mut section.subsections {
        canonicalize_section(subsection, seen, chart_type)?;
    }
    Ok(())
}
