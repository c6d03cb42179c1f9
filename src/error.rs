use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised by schema construction, registration and document decoding.
///
/// Everything except `UnknownChartType` and `InvalidData` indicates a broken
/// chart-type definition and is expected to surface at registration time.
/// Per-field submission problems are reported as
/// [`ValidationError`](crate::api::ValidationError) instead.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown field kind `{kind}`")]
    UnknownFieldKind { kind: String },

    #[error("duplicate field id `{id}` in chart type `{chart_type}`")]
    DuplicateFieldId { chart_type: String, id: String },

    #[error("invalid field id `{id}`: {reason}")]
    InvalidFieldId { id: String, reason: &'static str },

    #[error("hook `{hook}` failed for chart type `{chart_type}`: {message}")]
    HookFailed {
        chart_type: String,
        hook: &'static str,
        message: String,
    },

    #[error("chart type `{0}` is already registered")]
    DuplicateChartType(String),

    #[error("unknown hook set `{0}`")]
    UnknownHookSet(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown chart type `{0}`")]
    UnknownChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl SettingsError {
    /// Returns `true` for errors that indicate a defective variant definition
    /// rather than bad request input.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::UnknownChartType(_) | Self::InvalidData(_))
    }
}
