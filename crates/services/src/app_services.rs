use std::sync::Arc;

use learn_core::model::TimingSettings;
use learn_core::ContentCatalog;

use crate::catalog_service::CatalogService;
use crate::flow_service::FlowService;
use crate::Clock;

/// Assembles app-facing services over the built-in content.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    flows: Arc<FlowService>,
}

impl AppServices {
    #[must_use]
    pub fn builtin(clock: Clock, timing: TimingSettings) -> Self {
        Self::with_catalog(clock, timing, ContentCatalog::builtin())
    }

    #[must_use]
    pub fn with_catalog(clock: Clock, timing: TimingSettings, catalog: ContentCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            catalog: Arc::new(CatalogService::new(Arc::clone(&catalog))),
            flows: Arc::new(FlowService::new(clock, timing, catalog)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn flows(&self) -> Arc<FlowService> {
        Arc::clone(&self.flows)
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("timing", &self.flows.timing())
            .finish_non_exhaustive()
    }
}
