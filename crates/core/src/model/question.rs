use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::step::{Modality, Step};

/// How hard a quiz question or lesson is meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A single-select quiz question.
///
/// The accepted answer is stored as the option text, not its position, so
/// reordering options never changes grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
    difficulty: Difficulty,
    category: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            answer: answer.into(),
            explanation: explanation.into(),
            difficulty,
            category: category.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Step for QuizQuestion {
    fn modality(&self) -> Modality {
        Modality::SingleSelect
    }

    fn prompt(&self) -> &str {
        &self.question
    }

    fn accepted_answer(&self) -> Option<&str> {
        Some(&self.answer)
    }

    fn options(&self) -> &[String] {
        &self.options
    }
}
