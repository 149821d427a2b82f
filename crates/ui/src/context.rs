use std::sync::Arc;

use learn_core::model::SubjectFilter;
use services::{CatalogService, FlowService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn flows(&self) -> Arc<FlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    flows: Arc<FlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            flows: app.flows(),
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

    /// Id of the first card that opens a guided lesson, for the quick-start button.
    #[must_use]
    pub fn first_playable_lesson(&self) -> Option<u64> {
        self.catalog
            .lessons(SubjectFilter::All)
            .lessons
            .iter()
            .find(|card| card.flow.is_some())
            .map(|card| card.id.value())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
