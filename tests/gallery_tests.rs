use chart_settings::api::{SettingsEngine, SettingsEngineConfig};
use chart_settings::extensions::{
    ChartData, ChartDisplayKind, GalleryConfig, GalleryFetchError, GalleryLoader, GalleryRecord,
    GallerySource, GalleryState, PageRequest, parse_page, record_title,
};
use chart_settings::render::NullRenderer;
use serde_json::{Value, json};

fn record(id: u64, chart_type: &str, library: Option<&str>) -> GalleryRecord {
    GalleryRecord {
        id,
        chart_data: ChartData {
            chart_type: chart_type.to_owned(),
            chart_library: library.map(str::to_owned),
            data: json!([["x", "y"], [1, 2]]),
            series: json!([{ "label": "x" }, { "label": "y" }]),
            settings: json!({ "title": { "text": format!("Chart {id}") } }),
            data_exploded: None,
        },
    }
}

/// Serves a fixed list of records and remembers every request.
struct MockSource {
    records: Vec<GalleryRecord>,
    requests: Vec<PageRequest>,
    fail_next: bool,
}

impl MockSource {
    fn with_records(count: u64) -> Self {
        Self {
            records: (1..=count).map(|id| record(id, "line", Some("Google"))).collect(),
            requests: Vec::new(),
            fail_next: false,
        }
    }
}

impl GallerySource for MockSource {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<Vec<GalleryRecord>, GalleryFetchError> {
        self.requests.push(request.clone());
        if self.fail_next {
            self.fail_next = false;
            return Err(GalleryFetchError::Transport("connection reset".to_owned()));
        }
        Ok(self
            .records
            .iter()
            .skip(request.offset)
            .take(request.page_size)
            .cloned()
            .collect())
    }
}

#[test]
fn short_page_exhausts_the_gallery() {
    let mut source = MockSource::with_records(9);
    let mut loader = GalleryLoader::new(GalleryConfig::default());
    assert!(!loader.has_loaded());

    assert_eq!(loader.load_more(&mut source), Ok(true));
    assert_eq!(source.requests[0].offset, 0);
    assert_eq!(source.requests[0].page_size, 6);
    assert_eq!(source.requests[0].library_filter, "ChartJS");
    assert_eq!(loader.records().len(), 6);
    assert!(!loader.is_exhausted());
    assert!(loader.can_load_more());

    assert_eq!(loader.load_more(&mut source), Ok(true));
    assert_eq!(source.requests[1].offset, 6);
    assert_eq!(loader.records().len(), 9);
    assert!(loader.is_exhausted());
    assert_eq!(loader.state(), GalleryState::Exhausted);
    assert!(!loader.can_load_more());

    assert_eq!(loader.load_more(&mut source), Ok(false));
    assert_eq!(source.requests.len(), 2);
}

#[test]
fn excluded_library_records_are_dropped_after_pagination() {
    let mut source = MockSource::with_records(6);
    source.records[2].chart_data.chart_library = Some("B".to_owned());
    let config = GalleryConfig {
        excluded_library: Some("B".to_owned()),
        ..GalleryConfig::default()
    };
    let mut loader = GalleryLoader::new(config);

    assert_eq!(loader.load_more(&mut source), Ok(true));
    assert_eq!(loader.records().len(), 6);
    let visible = loader.visible_items();
    assert_eq!(visible.len(), 5);
    assert!(visible.iter().all(|item| item.id != 3));

    assert_eq!(loader.load_more(&mut source), Ok(true));
    assert_eq!(source.requests[1].offset, 6);
}

#[test]
fn in_flight_fetch_blocks_a_second_request() {
    let mut loader = GalleryLoader::new(GalleryConfig::default());
    let request = loader.begin_fetch().expect("first request");
    assert!(loader.is_busy());
    assert_eq!(loader.state(), GalleryState::Busy);
    assert!(loader.begin_fetch().is_none());
    assert!(!loader.can_load_more());

    loader.complete_fetch(Ok((1..=6).map(|id| record(id, "bar", None)).collect()));
    assert!(!loader.is_busy());
    assert_eq!(request.offset, 0);
    assert_eq!(loader.begin_fetch().map(|next| next.offset), Some(6));
}

#[test]
fn failed_fetch_clears_busy_and_retries_same_offset() {
    let mut source = MockSource::with_records(12);
    let mut loader = GalleryLoader::new(GalleryConfig::default());
    assert_eq!(loader.load_more(&mut source), Ok(true));

    source.fail_next = true;
    let err = loader.load_more(&mut source).expect_err("transport failure");
    assert!(matches!(err, GalleryFetchError::Transport(_)));
    assert!(!loader.is_busy());
    assert_eq!(loader.state(), GalleryState::Failed);
    assert_eq!(loader.last_error(), Some(&err));
    assert_eq!(loader.records().len(), 6);

    assert_eq!(loader.load_more(&mut source), Ok(true));
    assert_eq!(source.requests[1].offset, 6);
    assert_eq!(source.requests[2].offset, 6);
    assert!(loader.last_error().is_none());
    assert_eq!(loader.records().len(), 12);
}

#[test]
fn items_carry_title_and_display_kind() {
    let mut table = record(7, "dataTable", None);
    table.chart_data.settings = json!({});
    table.chart_data.data_exploded = Some(json!([["a"], [1]]));
    let mut loader = GalleryLoader::new(GalleryConfig {
        excluded_library: None,
        ..GalleryConfig::default()
    });
    loader.complete_fetch(Ok(vec![record(1, "polarArea", Some("ChartJS")), table]));

    let items = loader.visible_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Chart 1");
    assert_eq!(
        items[0].display,
        ChartDisplayKind::Chart("PolarAreaChart".to_owned())
    );
    assert_eq!(items[1].title, "#7");
    assert_eq!(items[1].display, ChartDisplayKind::DataTable);
    assert_eq!(items[1].data, json!([["a"], [1]]));
}

#[test]
fn plain_string_titles_are_used() {
    let mut plain = record(4, "gauge", None);
    plain.chart_data.settings = json!({ "title": "Uptime" });
    assert_eq!(record_title(&plain), "Uptime");

    plain.chart_data.settings = json!({ "title": "" });
    assert_eq!(record_title(&plain), "#4");
}

#[test]
fn rest_pages_decode_from_camel_case_json() {
    let body = r#"[
        {
            "id": 11,
            "chartData": {
                "chartType": "bar",
                "chartLibrary": "Google",
                "data": [["x", "y"]],
                "series": [],
                "settings": {"title": "Orders"},
                "dataExploded": ""
            }
        }
    ]"#;
    let page = parse_page(body).expect("decode page");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].chart_data.chart_type, "bar");
    assert_eq!(page[0].chart_data.data_exploded, Some(Value::String(String::new())));

    assert!(matches!(
        parse_page("{\"id\": 1}"),
        Err(GalleryFetchError::MalformedResponse(_))
    ));
}

#[test]
fn engine_builds_loader_from_config() {
    let config = SettingsEngineConfig::default().with_gallery(GalleryConfig {
        page_size: 3,
        ..GalleryConfig::default()
    });
    let engine = SettingsEngine::new(NullRenderer::default(), config).expect("engine init");
    let mut loader = engine.gallery_loader();
    assert_eq!(loader.config().page_size, 3);
    assert_eq!(loader.begin_fetch().map(|request| request.page_size), Some(3));
}
