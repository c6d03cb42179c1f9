//! chart-settings: settings-schema engine for chart widgets.
//!
//! Chart types share one base settings tree and specialize it through three
//! hooks. The crate composes the visible tree for a chart type, turns it into
//! a view-independent widget frame, and binds form submissions back into a
//! persisted value tree. Drawing charts and storing documents stay with the
//! host application.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{SettingsEngine, SettingsEngineConfig};
pub use error::{SettingsError, SettingsResult};
