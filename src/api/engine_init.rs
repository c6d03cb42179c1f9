use tracing::debug;

use crate::error::SettingsResult;
use crate::render::Renderer;

use super::{ProfileRegistry, SettingsEngine, SettingsEngineConfig};

impl<R: Renderer> SettingsEngine<R> {
    /// Creates an engine and registers every configured chart type.
    ///
    /// Configuration errors (unknown field kinds, duplicate ids, failing
    /// hooks) are returned here and never at request time.
    pub fn new(renderer: R, config: SettingsEngineConfig) -> SettingsResult<Self> {
        let registry = ProfileRegistry::from_config(&config)?;
        debug!(
            library = %config.library,
            chart_types = registry.len(),
            "initialized settings engine"
        );
        Ok(Self {
            renderer,
            config,
            registry,
        })
    }

    /// Creates an engine around an already populated registry.
    #[must_use]
    pub fn with_registry(
        renderer: R,
        config: SettingsEngineConfig,
        registry: ProfileRegistry,
    ) -> Self {
        Self {
            renderer,
            config,
            registry,
        }
    }
}
