use chart_settings::SettingsError;
use chart_settings::api::{
    CHARTJS_ASSETS, ChartTypeHooks, FieldSpec, HookError, HookResult, ProfileRegistry,
    ProfileSpec, SettingsEngine, SettingsEngineConfig,
};
use chart_settings::core::{ChartTypeProfile, Field, FieldValue, SeriesMeta, ValueTree};
use chart_settings::render::NullRenderer;

fn init(config: SettingsEngineConfig) -> Result<SettingsEngine<NullRenderer>, SettingsError> {
    SettingsEngine::new(NullRenderer::default(), config)
}

#[test]
fn builtin_chartjs_types_are_registered() {
    let engine = init(SettingsEngineConfig::default()).expect("engine init");
    let types: Vec<&str> = engine.registry().chart_types().collect();
    assert_eq!(
        types,
        vec!["line", "bar", "pie", "doughnut", "radar", "polarArea"]
    );
    assert_eq!(
        engine.required_assets("bar").expect("bar assets"),
        CHARTJS_ASSETS.map(str::to_owned).as_slice()
    );
}

#[test]
fn unknown_chart_type_is_a_request_error() {
    let engine = init(SettingsEngineConfig::default()).expect("engine init");
    let err = engine
        .render("sankey", &[], &ValueTree::new())
        .expect_err("unknown type");
    assert!(matches!(err, SettingsError::UnknownChartType(ref id) if id == "sankey"));
    assert!(!err.is_configuration_error());
}

#[test]
fn unknown_field_kind_fails_at_startup() {
    let config = SettingsEngineConfig::default().with_profile(
        ProfileSpec::new("gauge").with_field(FieldSpec::new("needle", "slider", "Needle")),
    );
    let err = init(config).err().expect("startup must fail");
    assert!(matches!(err, SettingsError::UnknownFieldKind { ref kind } if kind == "slider"));
    assert!(err.is_configuration_error());
}

#[test]
fn duplicate_field_id_fails_at_startup() {
    let config = SettingsEngineConfig::default().with_profile(
        ProfileSpec::new("gauge").with_field(FieldSpec::new("title.text", "text", "Title again")),
    );
    let err = init(config).err().expect("startup must fail");
    assert!(matches!(
        err,
        SettingsError::DuplicateFieldId { ref chart_type, ref id }
            if chart_type == "gauge" && id == "title[text]"
    ));
}

#[test]
fn invalid_default_fails_at_startup() {
    let config = SettingsEngineConfig::default().with_profile(
        ProfileSpec::new("gauge")
            .with_field(FieldSpec::new("needleColor", "color", "Needle").with_default("blue")),
    );
    assert!(matches!(init(config), Err(SettingsError::InvalidConfig(_))));
}

#[test]
fn unknown_hook_set_and_duplicate_type_fail_at_startup() {
    let config = SettingsEngineConfig::default()
        .with_profile(ProfileSpec::new("gauge").with_hooks("sunburst"));
    assert!(matches!(init(config), Err(SettingsError::UnknownHookSet(_))));

    let config = SettingsEngineConfig::default().with_profile(ProfileSpec::new("line"));
    assert!(matches!(
        init(config),
        Err(SettingsError::DuplicateChartType(ref id)) if id == "line"
    ));
}

fn broken_series(_: &ChartTypeProfile, _: usize, _: &ValueTree) -> HookResult<Vec<Field>> {
    Err(HookError("series table missing".to_owned()))
}

fn colliding_series(_: &ChartTypeProfile, _: usize, _: &ValueTree) -> HookResult<Vec<Field>> {
    Ok(vec![Field::color("series[0][color]", "Color")])
}

#[test]
fn failing_hook_is_surfaced_at_registration() {
    let mut registry = ProfileRegistry::new();
    let err = registry
        .register(
            ChartTypeProfile::new("broken", "ChartJS"),
            ChartTypeHooks::named("broken").with_chart_type_series(broken_series),
        )
        .expect_err("hook failure");
    assert!(matches!(
        err,
        SettingsError::HookFailed { hook: "chart_type_series", ref message, .. }
            if message == "series table missing"
    ));
    assert!(registry.is_empty());
}

#[test]
fn series_hook_collisions_are_caught_by_the_registration_probe() {
    let mut registry = ProfileRegistry::new();
    let err = registry
        .register(
            ChartTypeProfile::new("collide", "ChartJS"),
            ChartTypeHooks::named("collide").with_chart_type_series(colliding_series),
        )
        .expect_err("duplicate id across series");
    assert!(matches!(err, SettingsError::DuplicateFieldId { .. }));
}

#[test]
fn profiles_load_from_json_config() {
    let config = SettingsEngineConfig::from_json_str(
        r#"{
            "include_builtin_profiles": false,
            "profiles": [
                {
                    "id": "scatter",
                    "display_name": "Scatter",
                    "supports_animation": true,
                    "has_axes": true,
                    "hooks": "line",
                    "legend_positions": ["right", "bottom"],
                    "required_assets": ["chartjs"],
                    "fields": [
                        {
                            "id": "custom.pointRadius",
                            "kind": "number",
                            "label": "Point Radius",
                            "default_value": 3,
                            "constraints": { "min": 0, "max": 20 }
                        }
                    ]
                }
            ],
            "gallery": { "page_size": 12 }
        }"#,
    )
    .expect("parse config");
    let engine = init(config).expect("engine init");

    assert_eq!(engine.registry().len(), 1);
    assert_eq!(engine.config().gallery.page_size, 12);
    assert_eq!(engine.config().library, "ChartJS");

    let profile = engine.profile("scatter").expect("scatter profile");
    assert_eq!(profile.library, "ChartJS");
    assert!(profile.has_axes);

    let series = vec![SeriesMeta::labeled("x"), SeriesMeta::labeled("y")];
    let schema = engine
        .render("scatter", &series, &ValueTree::new())
        .expect("render scatter");
    let radius = schema.field("custom[pointRadius]").expect("declared field");
    assert_eq!(radius.default_value, Some(FieldValue::Number(3.0)));
    assert!(schema.field("series[0][lineTension]").is_some());
    assert_eq!(
        schema
            .field("legend[position]")
            .and_then(|field| field.default_value.clone()),
        Some(FieldValue::text("right"))
    );
}

#[test]
fn malformed_config_json_is_rejected() {
    assert!(matches!(
        SettingsEngineConfig::from_json_str("{\"profiles\": 3}"),
        Err(SettingsError::InvalidConfig(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let config = SettingsEngineConfig::default()
        .with_profile(ProfileSpec::new("gauge").with_animation(true));
    let json = config.to_json_pretty().expect("serialize config");
    let parsed = SettingsEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}
