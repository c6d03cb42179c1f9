pub mod base_sections;
mod binder;
mod builtin_profiles;
mod composer;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod hooks;
mod json_contract;
mod registry;

pub use binder::{BindOutcome, SubmittedValues, ValidationError, bind};
pub use builtin_profiles::{
    BAR_HOOKS, CHARTJS_ASSETS, CHARTJS_LIBRARY, DEFAULT_HOOKS, HOOK_SETS, LINE_HOOKS, PIE_HOOKS,
    POLAR_AREA_HOOKS, RADAR_HOOKS, chartjs_profiles, hook_set,
};
pub use composer::SettingsComposer;
pub use engine::SettingsEngine;
pub use engine_config::{FieldSpec, ProfileSpec, SettingsEngineConfig};
pub use hooks::{
    AnimationSettingsHook, ChartTypeHooks, ChartTypeSeriesHook, ChartTypeSettingsHook, HookError,
    HookResult,
};
pub use json_contract::{
    SCHEMA_JSON_SCHEMA_V1, SchemaJsonContractV1, VALUES_JSON_SCHEMA_V1, ValuesJsonContractV1,
};
pub use registry::{ChartTypeEntry, ProfileRegistry};
