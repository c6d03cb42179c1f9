use crate::core::ChartTypeProfile;
use crate::error::SettingsResult;
use crate::extensions::GalleryLoader;
use crate::render::Renderer;

use super::{ProfileRegistry, SettingsEngine, SettingsEngineConfig};

impl<R: Renderer> SettingsEngine<R> {
    #[must_use]
    pub fn config(&self) -> &SettingsEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn profile(&self, chart_type: &str) -> SettingsResult<&ChartTypeProfile> {
        self.registry.entry(chart_type).map(|entry| &entry.profile)
    }

    /// Asset identifiers the host must load to draw `chart_type`.
    pub fn required_assets(&self, chart_type: &str) -> SettingsResult<&[String]> {
        self.profile(chart_type)
            .map(|profile| profile.required_assets.as_slice())
    }

    /// Fresh gallery loader using the configured page size and filters.
    #[must_use]
    pub fn gallery_loader(&self) -> GalleryLoader {
        GalleryLoader::new(self.config.gallery.clone())
    }
}
