use std::sync::Arc;

use learn_core::model::{LessonId, TimingSettings};
use learn_core::ContentCatalog;
use tracing::info;

use crate::collaborators::Collaborators;
use crate::error::FlowError;
use crate::sessions::{LessonController, QuizController, StepSequenceController};
use crate::Clock;

/// Builds lesson and quiz controllers from catalog content.
#[derive(Clone)]
pub struct FlowService {
    clock: Clock,
    timing: TimingSettings,
    catalog: Arc<ContentCatalog>,
}

impl FlowService {
    #[must_use]
    pub fn new(clock: Clock, timing: TimingSettings, catalog: Arc<ContentCatalog>) -> Self {
        Self {
            clock,
            timing,
            catalog,
        }
    }

    #[must_use]
    pub fn timing(&self) -> TimingSettings {
        self.timing
    }

    /// Start the step flow behind a lesson card.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Catalog` if the card is unknown or has no flow, and
    /// `FlowError::Session` if its steps are malformed.
    pub fn start_lesson(
        &self,
        lesson_id: LessonId,
        collaborators: Collaborators,
    ) -> Result<LessonController, FlowError> {
        let steps = self.catalog.lesson_steps(lesson_id)?;
        let controller =
            StepSequenceController::lesson(steps.to_vec(), self.timing, self.clock, collaborators)?;
        info!(%lesson_id, steps = steps.len(), "lesson started");
        Ok(controller)
    }

    /// Start the timed quiz over the built-in questions.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Session` if the questions are empty or malformed.
    pub fn start_quiz(&self, collaborators: Collaborators) -> Result<QuizController, FlowError> {
        let questions = self.catalog.quiz_questions();
        let controller = StepSequenceController::quiz(
            questions.to_vec(),
            self.timing,
            self.clock,
            collaborators,
        )?;
        info!(
            questions = questions.len(),
            seconds = self.timing.quiz_seconds_per_question(),
            "quiz started"
        );
        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use learn_core::time::fixed_clock;
    use learn_core::CatalogError;

    use super::*;

    fn service() -> FlowService {
        FlowService::new(
            fixed_clock(),
            TimingSettings::default(),
            Arc::new(ContentCatalog::builtin()),
        )
    }

    #[test]
    fn math_cards_start_the_numbers_lesson() {
        let service = service();
        for id in [1, 4] {
            let lesson = service
                .start_lesson(LessonId::new(id), Collaborators::default())
                .unwrap();
            assert_eq!(lesson.steps().len(), 4);
        }
    }

    #[test]
    fn cards_without_flow_are_rejected() {
        let err = service()
            .start_lesson(LessonId::new(2), Collaborators::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::Catalog(CatalogError::NoFlow(id)) if id == LessonId::new(2)
        ));
    }

    #[test]
    fn quiz_uses_configured_countdown() {
        let timing = TimingSettings::new(2_000, 2_500, 2_000, 12).unwrap();
        let service = FlowService::new(
            fixed_clock(),
            timing,
            Arc::new(ContentCatalog::builtin()),
        );
        let quiz = service.start_quiz(Collaborators::default()).unwrap();
        assert_eq!(quiz.snapshot().remaining_secs, Some(12));
        assert_eq!(quiz.snapshot().total, 5);
    }
}
