mod frame;
mod null_renderer;

pub use frame::{Control, ControlOption, GroupFrame, SectionFrame, SettingsFrame};
pub use null_renderer::NullRenderer;

use crate::error::SettingsResult;

/// Contract implemented by any view layer.
///
/// Views receive a fully materialized `SettingsFrame` and never consult the
/// schema or the chart-type hooks themselves.
pub trait Renderer {
    fn render(&mut self, frame: &SettingsFrame) -> SettingsResult<()>;
}
