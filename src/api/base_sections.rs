//! Shared sections every chart type renders unmodified.
//!
//! Title, tooltip and the view group have no hook point: they are geometry and
//! text concerns that do not depend on the variant.

use crate::core::{
    ChartTypeProfile, Field, LegendPosition, Section, SelectOption, TextPattern, Visibility,
    easing_options, font_family_options, font_size_options,
};

pub const ANIMATION_DEFAULT_DURATION_MS: f64 = 1000.0;
pub const ANIMATION_MIN_DURATION_MS: f64 = 1000.0;
pub const LEGEND_DEFAULT_POSITION: LegendPosition = LegendPosition::Top;

const MANUAL_CONFIG_DOCS_URL: &str = "https://www.chartjs.org/docs/latest/configuration/";

/// Family select and size select sharing one id prefix.
///
/// `prefix` is empty for the chart-wide pair (`fontName`, `fontSize`) and a
/// bracketed path otherwise (`legend[labels]` gives `legend[labels][fontName]`).
#[must_use]
pub fn font_pair_fields(prefix: &str) -> [Field; 2] {
    let id = |key: &str| {
        if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}[{key}]")
        }
    };
    [
        Field::select(id("fontName"), "Font Family", font_family_options()).allow_empty(),
        Field::select(id("fontSize"), "Font Size", font_size_options())
            .allow_empty()
            .with_description("The default font family and size for all text in the chart."),
    ]
}

#[must_use]
pub fn title_section() -> Section {
    Section::new("Title")
        .with_field(
            Field::text("title[text]", "Chart Title")
                .with_description("Text to display above the chart."),
        )
        .with_field(Field::color("title[fontColor]", "Chart Title Color").with_default("#000"))
}

#[must_use]
pub fn font_styles_section() -> Section {
    Section::new("Font Styles").with_fields(font_pair_fields(""))
}

/// Legend section. The position always carries a default so an unset
/// position never reaches the charting library.
#[must_use]
pub fn legend_section(profile: &ChartTypeProfile) -> Section {
    let positions = profile.offered_legend_positions();
    let mut section = Section::new("Legend");

    if let Some(default) = positions
        .iter()
        .copied()
        .find(|position| *position == LEGEND_DEFAULT_POSITION)
        .or_else(|| positions.first().copied())
    {
        let options = positions
            .iter()
            .map(|position| SelectOption::new(position.as_str(), position.label()))
            .collect();
        section.fields.push(
            Field::select("legend[position]", "Position", options)
                .with_default(default.as_str())
                .with_description(
                    "Determines where to place the legend, compared to the chart area.",
                ),
        );
    }

    section
        .with_field(
            Field::checkbox("legend[reverse]", "Show datasets in reverse order")
                .with_description("Legend will show datasets in reverse order."),
        )
        .with_fields(font_pair_fields("legend[labels]"))
        .with_field(Field::color("legend[labels][fontColor]", "Font Color").with_default("#000"))
}

#[must_use]
pub fn tooltip_section() -> Section {
    Section::new("Tooltip").with_field(
        Field::checkbox("tooltip[intersect]", "Trigger")
            .with_default(true)
            .with_description(
                "Determines if the tooltip should only display when the mouse intersects with an element.",
            ),
    )
}

#[must_use]
pub fn animation_section() -> Section {
    Section::new("Animation")
        .with_field(
            Field::number("animation[duration]", "Duration")
                .with_default(ANIMATION_DEFAULT_DURATION_MS)
                .with_range(Some(ANIMATION_MIN_DURATION_MS), None)
                .with_placeholder("1000")
                .with_description("The duration of the animation, in milliseconds")
                .visible_if(Visibility::SupportsAnimation),
        )
        .with_field(
            Field::select("animation[easing]", "Easing", easing_options())
                .allow_empty()
                .with_description("The easing function applied to the animation.")
                .visible_if(Visibility::SupportsAnimation),
        )
}

fn axis_section(title: &str, axis: &str) -> Section {
    Section::new(title)
        .collapsible(true)
        .with_field(
            Field::text(format!("{axis}[scaleLabel][labelString]"), "Axis Title")
                .with_description("The title of the axis.")
                .visible_if(Visibility::HasAxes),
        )
        .with_field(
            Field::color(format!("{axis}[ticks][fontColor]"), "Labels Color")
                .visible_if(Visibility::HasAxes),
        )
        .with_field(
            Field::checkbox(format!("{axis}[ticks][beginAtZero]"), "Begin At Zero")
                .visible_if(Visibility::HasAxes),
        )
}

#[must_use]
pub fn axes_sections() -> Vec<Section> {
    vec![
        axis_section("Horizontal Axis", "xAxes"),
        axis_section("Vertical Axis", "yAxes"),
    ]
}

/// Shared per-series format field. `index` is the storage index.
#[must_use]
pub fn series_format_field(index: usize) -> Field {
    Field::text(format!("series[{index}][format]"), "Format")
        .with_placeholder("0.00")
        .with_description("Enter custom format pattern to apply to this series value.")
        .visible_if(Visibility::SeriesSettings)
}

fn dimension_field(id: &str, label: &str, placeholder: &str) -> Field {
    Field::text(id, label)
        .with_pattern(TextPattern::Dimension)
        .with_placeholder(placeholder)
}

#[must_use]
pub fn layout_section() -> Section {
    Section::new("Layout")
        .with_description(
            "Configure the total size of the chart. Two formats are supported: a number, or a number followed by %. A simple number is a value in pixels; a number followed by % is a percentage.",
        )
        .with_field(dimension_field("width", "Width Of Chart", "100%"))
        .with_field(dimension_field("height", "Height Of Chart", "400"))
}

#[must_use]
pub fn chart_area_section() -> Section {
    Section::new("Chart Area")
        .with_description(
            "Configure the placement and size of the chart area (where the chart itself is drawn, excluding axis and legends).",
        )
        .with_field(dimension_field("chartArea[left]", "Left Margin", "20%"))
        .with_field(dimension_field("chartArea[top]", "Top Margin", "20%"))
        .with_field(dimension_field("chartArea[width]", "Width Of Chart Area", "60%"))
        .with_field(dimension_field("chartArea[height]", "Height Of Chart Area", "60%"))
}

#[must_use]
pub fn manual_config_section() -> Section {
    Section::new("Manual Configuration")
        .collapsible(true)
        .with_description(format!(
            "Configure the graph by providing configuration variables right from the library API: {MANUAL_CONFIG_DOCS_URL}"
        ))
        .with_field(
            Field::textarea("manual", "Configuration")
                .with_pattern(TextPattern::JsonObject)
                .with_placeholder("{}")
                .visible_if(Visibility::ManualConfigMode),
        )
}
