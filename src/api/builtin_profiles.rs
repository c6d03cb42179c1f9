//! ChartJS chart types shipped with the crate and the hook sets they use.

use crate::core::{ChartTypeProfile, Field, LegendPosition, Section, ValueTree};

use super::hooks::{ChartTypeHooks, HookResult};

pub const CHARTJS_LIBRARY: &str = "ChartJS";

pub const CHARTJS_ASSETS: [&str; 4] = ["moment", "numeral", "chartjs", "chartjs-render"];

pub const DEFAULT_HOOKS: ChartTypeHooks = ChartTypeHooks::named("default");

pub const LINE_HOOKS: ChartTypeHooks =
    ChartTypeHooks::named("line").with_chart_type_series(line_series);

pub const BAR_HOOKS: ChartTypeHooks = ChartTypeHooks::named("bar")
    .with_chart_type_settings(bar_settings)
    .with_chart_type_series(background_color_series);

pub const PIE_HOOKS: ChartTypeHooks = ChartTypeHooks::named("pie")
    .with_chart_type_settings(pie_settings)
    .with_chart_type_series(background_color_series);

pub const RADAR_HOOKS: ChartTypeHooks =
    ChartTypeHooks::named("radar").with_chart_type_series(radar_series);

pub const POLAR_AREA_HOOKS: ChartTypeHooks =
    ChartTypeHooks::named("polarArea").with_chart_type_settings(polar_area_settings);

/// Hook sets addressable by name from configuration.
pub const HOOK_SETS: [ChartTypeHooks; 6] = [
    DEFAULT_HOOKS,
    LINE_HOOKS,
    BAR_HOOKS,
    PIE_HOOKS,
    RADAR_HOOKS,
    POLAR_AREA_HOOKS,
];

#[must_use]
pub fn hook_set(name: &str) -> Option<ChartTypeHooks> {
    HOOK_SETS.into_iter().find(|hooks| hooks.name == name)
}

fn chartjs_profile(id: &str, display_name: &str) -> ChartTypeProfile {
    ChartTypeProfile::new(id, CHARTJS_LIBRARY)
        .with_display_name(display_name)
        .with_animation(true)
        .with_legend_positions(LegendPosition::ALL)
        .with_manual_config_mode(true)
        .with_required_assets(CHARTJS_ASSETS)
}

/// Built-in chart types paired with their hooks.
#[must_use]
pub fn chartjs_profiles() -> Vec<(ChartTypeProfile, ChartTypeHooks)> {
    vec![
        (chartjs_profile("line", "Line").with_axes(true), LINE_HOOKS),
        (chartjs_profile("bar", "Bar").with_axes(true), BAR_HOOKS),
        (chartjs_profile("pie", "Pie"), PIE_HOOKS),
        (chartjs_profile("doughnut", "Doughnut"), PIE_HOOKS),
        (chartjs_profile("radar", "Radar"), RADAR_HOOKS),
        (chartjs_profile("polarArea", "Polar Area"), POLAR_AREA_HOOKS),
    ]
}

fn line_series(_: &ChartTypeProfile, index: usize, _: &ValueTree) -> HookResult<Vec<Field>> {
    Ok(vec![
        Field::checkbox(format!("series[{index}][fill]"), "Fill Area")
            .with_description("Fill the area under the line."),
        Field::number(format!("series[{index}][lineTension]"), "Line Tension")
            .with_range(Some(0.0), Some(1.0))
            .with_placeholder("0.4")
            .with_description("Bezier curve tension of the line. Set to 0 to draw straight lines."),
    ])
}

fn radar_series(_: &ChartTypeProfile, index: usize, _: &ValueTree) -> HookResult<Vec<Field>> {
    Ok(vec![
        Field::checkbox(format!("series[{index}][fill]"), "Fill Area")
            .with_description("Fill the area enclosed by the series."),
    ])
}

fn background_color_series(
    _: &ChartTypeProfile,
    index: usize,
    _: &ValueTree,
) -> HookResult<Vec<Field>> {
    Ok(vec![Field::color(
        format!("series[{index}][backgroundColor]"),
        "Background Color",
    )])
}

fn bar_settings(_: &ChartTypeProfile, _: &ValueTree) -> HookResult<Vec<Section>> {
    Ok(vec![
        Section::new("Bars").with_field(
            Field::checkbox("horizontal", "Horizontal Bars")
                .with_description("Draw the bars horizontally."),
        ),
    ])
}

fn pie_settings(profile: &ChartTypeProfile, _: &ValueTree) -> HookResult<Vec<Section>> {
    let default_cutout = if profile.id == "doughnut" { 50.0 } else { 0.0 };
    Ok(vec![
        Section::new("Pie").with_field(
            Field::number("cutoutPercentage", "Cutout Percentage")
                .integer()
                .with_range(Some(0.0), Some(100.0))
                .with_default(default_cutout)
                .with_description("The percentage of the chart that is cut out of the middle."),
        ),
    ])
}

fn polar_area_settings(_: &ChartTypeProfile, _: &ValueTree) -> HookResult<Vec<Section>> {
    Ok(vec![
        Section::new("Polar Area").with_field(
            Field::number("startAngle", "Start Angle")
                .with_placeholder("-0.5")
                .with_description("Starting angle to draw arcs for the first item, in radians of PI."),
        ),
    ])
}
