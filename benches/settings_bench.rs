use chart_settings::api::{SettingsEngine, SettingsEngineConfig, SubmittedValues};
use chart_settings::core::{FieldPath, SeriesMeta, ValueTree};
use chart_settings::render::{NullRenderer, SettingsFrame};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn series(count: usize) -> Vec<SeriesMeta> {
    (0..count)
        .map(|i| SeriesMeta::labeled(format!("column {i}")))
        .collect()
}

fn bench_field_path_canonicalize(c: &mut Criterion) {
    c.bench_function("field_path_canonicalize", |b| {
        b.iter(|| {
            let _ = FieldPath::canonicalize(black_box("legend.labels.fontColor"))
                .expect("valid id");
        })
    });
}

fn bench_render_line_64_series(c: &mut Criterion) {
    let engine = SettingsEngine::new(NullRenderer::default(), SettingsEngineConfig::default())
        .expect("engine init");
    let series = series(64);
    let values = ValueTree::new();

    c.bench_function("render_line_64_series", |b| {
        b.iter(|| {
            let schema = engine
                .render("line", black_box(&series), black_box(&values))
                .expect("render should succeed");
            let _ = SettingsFrame::build(&schema, &values);
        })
    });
}

fn bench_bind_bar_64_series(c: &mut Criterion) {
    let engine = SettingsEngine::new(NullRenderer::default(), SettingsEngineConfig::default())
        .expect("engine init");
    let series = series(64);
    let submitted: SubmittedValues = (0..63)
        .flat_map(|i| {
            [
                (format!("series[{i}][format]"), "0.00".to_owned()),
                (format!("series[{i}][backgroundColor]"), "#3366cc".to_owned()),
            ]
        })
        .chain([
            ("title[text]".to_owned(), "Revenue".to_owned()),
            ("fontSize".to_owned(), "14".to_owned()),
        ])
        .collect();
    let previous = ValueTree::new();

    c.bench_function("bind_bar_64_series", |b| {
        b.iter(|| {
            let _ = engine
                .bind("bar", black_box(&series), black_box(&submitted), &previous)
                .expect("bind should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_field_path_canonicalize,
    bench_render_line_64_series,
    bench_bind_bar_64_series
);
criterion_main!(benches);
