use learn_core::model::{Difficulty, Phase, QuizQuestion, Step, Summary, Tier};
use services::QuizController;

use super::lesson_vm::FeedbackVm;

/// Seconds at or below which the countdown is shown as urgent.
pub const LOW_TIME_SECS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub counter: String,
    pub category: String,
    pub difficulty: &'static str,
    pub easy: bool,
    pub countdown: String,
    pub low_time: bool,
    pub score: u32,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub can_submit: bool,
    pub revealing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub label: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    /// Five slots; `true` renders a filled star.
    pub stars: Vec<bool>,
    pub score_line: String,
    pub headline: String,
    pub rows: Vec<ResultRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Results(ResultsVm),
}

impl QuizScreen {
    #[must_use]
    pub fn from_controller(controller: &QuizController) -> Self {
        match (controller.summary(), controller.current_step()) {
            (Some(summary), _) => QuizScreen::Results(results(summary, controller)),
            (None, Some(question)) => QuizScreen::Question(question_vm(question, controller)),
            (None, None) => QuizScreen::Results(ResultsVm {
                stars: vec![false; 5],
                score_line: String::new(),
                headline: String::new(),
                rows: Vec::new(),
            }),
        }
    }
}

fn question_vm(question: &QuizQuestion, controller: &QuizController) -> QuestionVm {
    let snapshot = controller.snapshot();
    let remaining = snapshot.remaining_secs.unwrap_or_default();
    let pending = snapshot.pending_answer.as_deref();
    let revealing = snapshot.phase == Phase::Revealing;

    QuestionVm {
        counter: format!(
            "Question {} of {}",
            snapshot.step_number(),
            snapshot.total
        ),
        category: question.category().to_string(),
        difficulty: question.difficulty().label(),
        easy: question.difficulty() == Difficulty::Easy,
        countdown: format!("{remaining}s"),
        low_time: remaining <= LOW_TIME_SECS,
        score: snapshot.score,
        prompt: question.question().to_string(),
        options: question
            .options()
            .iter()
            .map(|option| OptionVm {
                label: option.clone(),
                selected: pending == Some(option.as_str()),
            })
            .collect(),
        feedback: snapshot.current_outcome.map(|correct| FeedbackVm {
            correct,
            text: if correct { "Correct! 🎉" } else { "Incorrect ❌" },
            detail: Some(question.explanation().to_string()),
        }),
        can_submit: !revealing && pending.is_some(),
        revealing,
    }
}

fn results(summary: &Summary, controller: &QuizController) -> ResultsVm {
    let filled = usize::from(summary.rating_stars());
    let headline = summary.tier().map_or_else(String::new, |tier| {
        let icon = match tier {
            Tier::Top => "🌟",
            Tier::Mid => "👏",
            Tier::Base => "💪",
        };
        format!("{icon} {}", tier.headline())
    });

    ResultsVm {
        stars: (0..5).map(|slot| slot < filled).collect(),
        score_line: format!(
            "You scored: {} out of {}",
            summary.score(),
            summary.total()
        ),
        headline,
        rows: controller
            .session()
            .outcomes()
            .iter()
            .enumerate()
            .map(|(index, correct)| ResultRowVm {
                label: format!("Question {}", index + 1),
                correct: *correct,
            })
            .collect(),
    }
}
