use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartTypeProfile, Field, SeriesMeta, ValueTree};
use crate::error::{SettingsError, SettingsResult};

use super::builtin_profiles;
use super::composer::SettingsComposer;
use super::engine_config::{ProfileSpec, SettingsEngineConfig};
use super::hooks::ChartTypeHooks;

/// Series used to exercise the per-series hook during registration.
const PROBE_SERIES: usize = 3;

/// Registered chart type: profile data plus its hooks.
#[derive(Debug, Clone)]
pub struct ChartTypeEntry {
    pub profile: ChartTypeProfile,
    pub hooks: ChartTypeHooks,
    pub extra_fields: Vec<Field>,
}

impl ChartTypeEntry {
    #[must_use]
    pub fn composer(&self) -> SettingsComposer<'_> {
        SettingsComposer::new(&self.profile, &self.hooks).with_extra_fields(&self.extra_fields)
    }
}

/// Static mapping from chart-type id to profile and hook set.
///
/// Every entry is composed once when registered so broken variant
/// definitions fail at startup rather than while serving a request.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    entries: IndexMap<String, ChartTypeEntry>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_chartjs() -> SettingsResult<Self> {
        let mut registry = Self::new();
        for (profile, hooks) in builtin_profiles::chartjs_profiles() {
            registry.register(profile, hooks)?;
        }
        Ok(registry)
    }

    pub fn from_config(config: &SettingsEngineConfig) -> SettingsResult<Self> {
        let mut registry = if config.include_builtin_profiles {
            Self::with_builtin_chartjs()?
        } else {
            Self::new()
        };
        for spec in &config.profiles {
            registry.register_spec(spec, &config.library)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, profile: ChartTypeProfile, hooks: ChartTypeHooks) -> SettingsResult<()> {
        self.insert(ChartTypeEntry {
            profile,
            hooks,
            extra_fields: Vec::new(),
        })
    }

    pub fn register_spec(&mut self, spec: &ProfileSpec, default_library: &str) -> SettingsResult<()> {
        let hooks = builtin_profiles::hook_set(&spec.hooks)
            .ok_or_else(|| SettingsError::UnknownHookSet(spec.hooks.clone()))?;
        let extra_fields = spec.extra_fields()?;
        for field in &extra_fields {
            if let Some(default) = &field.default_value {
                field
                    .kind
                    .widget()
                    .validate(default, &field.constraints)
                    .map_err(|e| {
                        SettingsError::InvalidConfig(format!(
                            "default of field `{}` is invalid: {e}",
                            field.id
                        ))
                    })?;
            }
        }
        self.insert(ChartTypeEntry {
            profile: spec.to_profile(default_library),
            hooks,
            extra_fields,
        })
    }

    fn insert(&mut self, entry: ChartTypeEntry) -> SettingsResult<()> {
        let id = entry.profile.id.clone();
        if id.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "chart type id must not be empty".to_owned(),
            ));
        }
        if self.entries.contains_key(&id) {
            return Err(SettingsError::DuplicateChartType(id));
        }

        let probe: Vec<SeriesMeta> = (0..=PROBE_SERIES)
            .map(|i| SeriesMeta::labeled(format!("Series {i}")))
            .collect();
        entry.composer().render(&probe, &ValueTree::new())?;

        debug!(chart_type = %id, hooks = entry.hooks.name, "registered chart type");
        self.entries.insert(id, entry);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, chart_type: &str) -> Option<&ChartTypeEntry> {
        self.entries.get(chart_type)
    }

    pub fn entry(&self, chart_type: &str) -> SettingsResult<&ChartTypeEntry> {
        self.get(chart_type)
            .ok_or_else(|| SettingsError::UnknownChartType(chart_type.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, chart_type: &str) -> bool {
        self.entries.contains_key(chart_type)
    }

    pub fn chart_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
