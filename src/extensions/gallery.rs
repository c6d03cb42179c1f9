use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::CHARTJS_LIBRARY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Library whose charts the data source is asked for.
    #[serde(default = "default_library")]
    pub library_filter: String,
    /// Records native to this library are dropped from the visible items.
    #[serde(default = "default_excluded_library")]
    pub excluded_library: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            library_filter: default_library(),
            excluded_library: default_excluded_library(),
        }
    }
}

fn default_page_size() -> usize {
    6
}

fn default_library() -> String {
    CHARTJS_LIBRARY.to_owned()
}

fn default_excluded_library() -> Option<String> {
    Some(CHARTJS_LIBRARY.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_size: usize,
    pub offset: usize,
    pub library_filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: String,
    #[serde(default)]
    pub chart_library: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub series: Value,
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub data_exploded: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRecord {
    pub id: u64,
    pub chart_data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryFetchError {
    #[error("gallery request failed: {0}")]
    Transport(String),
    #[error("gallery response is malformed: {0}")]
    MalformedResponse(String),
}

/// Paginated source of saved chart documents.
pub trait GallerySource {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<Vec<GalleryRecord>, GalleryFetchError>;
}

/// Decodes one page of the REST response body.
pub fn parse_page(body: &str) -> Result<Vec<GalleryRecord>, GalleryFetchError> {
    serde_json::from_str(body).map_err(|e| GalleryFetchError::MalformedResponse(e.to_string()))
}

/// How a record's chart is drawn in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChartDisplayKind {
    /// Drawn by the data-table component.
    DataTable,
    /// Drawn by the chart component under this chart name.
    Chart(String),
}

impl ChartDisplayKind {
    #[must_use]
    pub fn for_chart_type(chart_type: &str) -> Self {
        match chart_type {
            "dataTable" => Self::DataTable,
            "gauge" | "table" | "timeline" => Self::Chart(pascal_case(chart_type)),
            other => Self::Chart(format!("{}Chart", pascal_case(other))),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::DataTable => "dataTable",
            Self::Chart(name) => name,
        }
    }
}

/// Upper-cases the first letter of every word. Words are split on
/// separators and lower-to-upper case changes, so `polarArea` and
/// `polar_area` both become `PolarArea`.
fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut start_word = true;
    let mut previous_lower = false;
    for c in input.chars() {
        if !c.is_alphanumeric() {
            start_word = true;
            previous_lower = false;
            continue;
        }
        if c.is_uppercase() && previous_lower {
            start_word = true;
        }
        if start_word {
            out.extend(c.to_uppercase());
            start_word = false;
        } else {
            out.extend(c.to_lowercase());
        }
        previous_lower = c.is_lowercase() || c.is_numeric();
    }
    out
}

/// Renderable gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub id: u64,
    pub title: String,
    pub display: ChartDisplayKind,
    /// Alternate table when the record carries one, otherwise its data.
    pub data: Value,
    pub series: Value,
    pub settings: Value,
}

impl GalleryItem {
    #[must_use]
    pub fn from_record(record: &GalleryRecord) -> Self {
        let chart = &record.chart_data;
        let data = match &chart.data_exploded {
            Some(exploded) if !is_blank(exploded) => exploded.clone(),
            _ => chart.data.clone(),
        };
        Self {
            id: record.id,
            title: record_title(record),
            display: ChartDisplayKind::for_chart_type(&chart.chart_type),
            data,
            series: chart.series.clone(),
            settings: chart.settings.clone(),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// `settings.title` when set (plain or `{text}` form), otherwise `#<id>`.
#[must_use]
pub fn record_title(record: &GalleryRecord) -> String {
    let title = match record.chart_data.settings.get("title") {
        Some(Value::String(title)) => Some(title.as_str()),
        Some(Value::Object(title)) => title.get("text").and_then(Value::as_str),
        _ => None,
    };
    match title {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => format!("#{}", record.id),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Idle,
    Busy,
    Failed,
    Exhausted,
}

/// Offset-paginated loader over a [`GallerySource`].
///
/// The offset of each request is the number of records already loaded,
/// including records the library filter later hides. A failed fetch clears
/// the busy flag and keeps the error so the caller can show it and retry the
/// same page.
#[derive(Debug, Clone)]
pub struct GalleryLoader {
    config: GalleryConfig,
    records: Vec<GalleryRecord>,
    busy: bool,
    exhausted: bool,
    last_error: Option<GalleryFetchError>,
    pages_loaded: usize,
}

impl GalleryLoader {
    #[must_use]
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            busy: false,
            exhausted: false,
            last_error: None,
            pages_loaded: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&GalleryFetchError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn has_loaded(&self) -> bool {
        self.pages_loaded > 0
    }

    #[must_use]
    pub fn records(&self) -> &[GalleryRecord] {
        &self.records
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        if self.busy {
            GalleryState::Busy
        } else if self.last_error.is_some() {
            GalleryState::Failed
        } else if self.exhausted {
            GalleryState::Exhausted
        } else {
            GalleryState::Idle
        }
    }

    /// Whether a "load more" affordance should be offered: a full first page
    /// arrived and nothing is in flight.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.busy && !self.exhausted && self.records.len() >= self.config.page_size
    }

    /// Marks the loader busy and returns the next request, or `None` while a
    /// fetch is in flight or after the source ran out.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.busy || self.exhausted || self.config.page_size == 0 {
            return None;
        }
        self.busy = true;
        Some(PageRequest {
            page_size: self.config.page_size,
            offset: self.records.len(),
            library_filter: self.config.library_filter.clone(),
        })
    }

    pub fn complete_fetch(&mut self, result: Result<Vec<GalleryRecord>, GalleryFetchError>) {
        self.busy = false;
        match result {
            Ok(mut page) => {
                page.truncate(self.config.page_size);
                if page.len() < self.config.page_size {
                    self.exhausted = true;
                }
                debug!(
                    offset = self.records.len(),
                    fetched = page.len(),
                    exhausted = self.exhausted,
                    "loaded gallery page"
                );
                self.records.extend(page);
                self.pages_loaded += 1;
                self.last_error = None;
            }
            Err(err) => {
                warn!(offset = self.records.len(), error = %err, "gallery fetch failed");
                self.last_error = Some(err);
            }
        }
    }

    /// Fetches the next page synchronously. Returns `Ok(false)` when no
    /// request was issued.
    pub fn load_more<S: GallerySource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<bool, GalleryFetchError> {
        let Some(request) = self.begin_fetch() else {
            return Ok(false);
        };
        let result = source.fetch_page(&request);
        let outcome = result.as_ref().map(|_| true).map_err(|err| err.clone());
        self.complete_fetch(result);
        outcome
    }

    /// Items to draw, with records of the excluded library dropped silently.
    /// The count can be lower than [`records`](Self::records).
    #[must_use]
    pub fn visible_items(&self) -> Vec<GalleryItem> {
        self.records
            .iter()
            .filter(|record| !self.is_excluded(record))
            .map(GalleryItem::from_record)
            .collect()
    }

    fn is_excluded(&self, record: &GalleryRecord) -> bool {
        match (&self.config.excluded_library, &record.chart_data.chart_library) {
            (Some(excluded), Some(library)) => excluded == library,
            _ => false,
        }
    }
}
