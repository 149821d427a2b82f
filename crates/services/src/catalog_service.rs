use std::sync::Arc;

use learn_core::model::{Achievement, LearnerStats, LessonCard, LessonId, SubjectFilter};
use learn_core::{CatalogError, ContentCatalog};

/// A filtered slice of the lesson catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonListing {
    pub filter: SubjectFilter,
    pub lessons: Vec<LessonCard>,
}

impl LessonListing {
    #[must_use]
    pub fn count(&self) -> usize {
        self.lessons.len()
    }
}

/// Read-only access to subjects, lesson cards, and learner figures.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<ContentCatalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn filters(&self) -> Vec<SubjectFilter> {
        self.catalog.filters()
    }

    #[must_use]
    pub fn lessons(&self, filter: SubjectFilter) -> LessonListing {
        let lessons = self
            .catalog
            .lessons_in(filter)
            .into_iter()
            .cloned()
            .collect();
        LessonListing { filter, lessons }
    }

    /// Fetch one lesson card.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLesson` if no card has this id.
    pub fn lesson(&self, id: LessonId) -> Result<LessonCard, CatalogError> {
        self.catalog.lesson(id).cloned()
    }

    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        self.catalog.achievements().to_vec()
    }

    #[must_use]
    pub fn stats(&self) -> LearnerStats {
        self.catalog.stats()
    }
}
