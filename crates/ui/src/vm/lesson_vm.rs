use learn_core::model::{LessonStep, LessonStepKind, Phase};
use services::LessonController;

/// How the learner responds to the step on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepInputVm {
    /// A single "Start Learning!" button.
    Start,
    /// Typed number plus a check button.
    Freeform { value: String },
    /// One button per option; `grid` picks the wide activity layout.
    Choices { options: Vec<String>, grid: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: &'static str,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub title: String,
    pub visual: String,
    pub content: String,
    pub score_label: String,
    pub step_label: String,
    pub progress_percent: u32,
    pub input: StepInputVm,
    pub feedback: Option<FeedbackVm>,
    pub locked: bool,
    pub has_audio: bool,
    pub complete: bool,
}

impl LessonVm {
    #[must_use]
    pub fn from_controller(controller: &LessonController) -> Self {
        let snapshot = controller.snapshot();
        let progress = controller.progress();
        let step = controller.current_step();

        let feedback = snapshot.current_outcome.map(|correct| FeedbackVm {
            correct,
            text: if correct {
                "Great job! 🎉"
            } else {
                "Try again! 💪"
            },
            detail: None,
        });

        Self {
            title: step
                .and_then(LessonStep::title)
                .unwrap_or("Math Lesson")
                .to_string(),
            visual: step
                .and_then(LessonStep::visual)
                .unwrap_or("📚")
                .to_string(),
            content: step.map_or_else(
                || "Lesson complete! 🎉".to_string(),
                |step| step.content().to_string(),
            ),
            score_label: format!("Score: {}/{}", snapshot.score, snapshot.total),
            step_label: format!("Step {} of {}", snapshot.step_number(), snapshot.total),
            progress_percent: progress.percent,
            input: step.map_or(StepInputVm::Start, |step| {
                input_for(step, snapshot.pending_answer.as_deref())
            }),
            feedback,
            locked: snapshot.phase != Phase::Answering,
            has_audio: step.is_some_and(LessonStep::has_audio),
            complete: snapshot.terminal,
        }
    }
}

fn input_for(step: &LessonStep, pending: Option<&str>) -> StepInputVm {
    match step.kind() {
        LessonStepKind::Introduction => StepInputVm::Start,
        LessonStepKind::FreeformAnswer { .. } => StepInputVm::Freeform {
            value: pending.unwrap_or_default().to_string(),
        },
        LessonStepKind::SingleSelect { options, .. } => StepInputVm::Choices {
            options: options.clone(),
            grid: false,
        },
        LessonStepKind::MultiOptionGrid { options, .. } => StepInputVm::Choices {
            options: options.clone(),
            grid: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use learn_core::ContentCatalog;
    use learn_core::model::{LessonId, TimingSettings};
    use learn_core::time::fixed_clock;
    use services::{Collaborators, StepSequenceController};

    use super::*;

    fn lesson() -> LessonController {
        let catalog = ContentCatalog::builtin();
        StepSequenceController::lesson(
            catalog.lesson_steps(LessonId::new(1)).unwrap().to_vec(),
            TimingSettings::default(),
            fixed_clock(),
            Collaborators::default(),
        )
        .unwrap()
    }

    #[test]
    fn introduction_step_labels() {
        let vm = LessonVm::from_controller(&lesson());
        assert_eq!(vm.title, "Numbers 1-5");
        assert_eq!(vm.visual, "12345");
        assert_eq!(vm.step_label, "Step 1 of 4");
        assert_eq!(vm.score_label, "Score: 0/4");
        assert_eq!(vm.progress_percent, 25);
        assert_eq!(vm.input, StepInputVm::Start);
        assert!(vm.has_audio);
        assert!(vm.feedback.is_none());
    }

    #[test]
    fn wrong_answer_shows_retry_feedback_and_locks_input() {
        let mut lesson = lesson();
        let next = lesson.submit_answer(None).unwrap();
        lesson.fire(next.ticket);
        lesson.submit_answer(Some("4")).unwrap();

        let vm = LessonVm::from_controller(&lesson);
        assert_eq!(vm.title, "Counting Fish");
        assert!(vm.locked);
        let feedback = vm.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.text, "Try again! 💪");
    }

    #[test]
    fn apples_step_has_default_title_and_choices() {
        let mut lesson = lesson();
        for answer in [None, Some("3")] {
            let next = lesson.submit_answer(answer).unwrap();
            lesson.fire(next.ticket);
        }
        let vm = LessonVm::from_controller(&lesson);
        assert_eq!(vm.title, "Math Lesson");
        assert_eq!(vm.visual, "📚");
        assert_eq!(
            vm.input,
            StepInputVm::Choices {
                options: vec!["3".into(), "4".into(), "5".into()],
                grid: false,
            }
        );
    }
}
