use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A step is missing something its modality requires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    #[error("step prompt cannot be empty")]
    EmptyPrompt,

    #[error("{modality} step requires an accepted answer")]
    MissingAnswer { modality: Modality },

    #[error("{modality} step requires at least one option")]
    MissingOptions { modality: Modality },

    #[error("accepted answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },
}

/// Rejection of a candidate answer before any state changes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    #[error("an answer is required for this step")]
    Missing,
}

//
// ─── MODALITY ──────────────────────────────────────────────────────────────────
//

/// The interaction type of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    /// Narrative step; any gesture moves on and counts as correct.
    Introduction,
    /// Typed answer compared verbatim.
    FreeformAnswer,
    /// Pick one of an ordered list of options.
    SingleSelect,
    /// Tap one cell of a grid of choices.
    MultiOptionGrid,
}

impl Modality {
    /// Whether `submit` needs a non-empty candidate for this modality.
    #[must_use]
    pub fn requires_candidate(self) -> bool {
        !matches!(self, Modality::Introduction)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Introduction => "introduction",
            Modality::FreeformAnswer => "freeform-answer",
            Modality::SingleSelect => "single-select",
            Modality::MultiOptionGrid => "multi-option-grid",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// One displayable unit of a sequence: a lesson step or a quiz question.
///
/// Implementors only describe their content; validation and answer checking are
/// shared so lessons and quizzes grade identically.
pub trait Step {
    fn modality(&self) -> Modality;

    /// Main prompt text shown for the step.
    fn prompt(&self) -> &str;

    /// Canonical answer; `None` only for introductions.
    fn accepted_answer(&self) -> Option<&str>;

    /// Ordered candidate options (empty for freeform and introduction steps).
    fn options(&self) -> &[String];

    /// Checks that the step carries everything its modality needs.
    ///
    /// # Errors
    ///
    /// Returns `StepError` describing the first missing or inconsistent field.
    fn validate(&self) -> Result<(), StepError> {
        let modality = self.modality();
        if self.prompt().trim().is_empty() {
            return Err(StepError::EmptyPrompt);
        }
        if modality == Modality::Introduction {
            return Ok(());
        }

        let answer = match self.accepted_answer() {
            Some(answer) if !answer.is_empty() => answer,
            _ => return Err(StepError::MissingAnswer { modality }),
        };

        if matches!(modality, Modality::SingleSelect | Modality::MultiOptionGrid) {
            let options = self.options();
            if options.is_empty() {
                return Err(StepError::MissingOptions { modality });
            }
            for (idx, option) in options.iter().enumerate() {
                if options[..idx].contains(option) {
                    return Err(StepError::DuplicateOption {
                        option: option.clone(),
                    });
                }
            }
            if !options.iter().any(|option| option == answer) {
                return Err(StepError::AnswerNotAnOption {
                    answer: answer.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Grades a candidate against the accepted answer.
    ///
    /// Introductions are always correct. Everything else is an exact,
    /// case-sensitive comparison.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Missing` when the modality needs a candidate and none
    /// (or an empty one) was supplied.
    fn check(&self, candidate: Option<&str>) -> Result<bool, AnswerError> {
        let modality = self.modality();
        if !modality.requires_candidate() {
            return Ok(true);
        }
        match candidate {
            Some(candidate) if !candidate.is_empty() => {
                Ok(self.accepted_answer() == Some(candidate))
            }
            _ => Err(AnswerError::Missing),
        }
    }
}

//
// ─── LESSON STEP ───────────────────────────────────────────────────────────────
//

/// Interaction attached to a lesson step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LessonStepKind {
    Introduction,
    FreeformAnswer { answer: String },
    SingleSelect { options: Vec<String>, answer: String },
    MultiOptionGrid { options: Vec<String>, answer: String },
}

/// A single step of a guided lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStep {
    title: Option<String>,
    content: String,
    visual: Option<String>,
    audio: bool,
    kind: LessonStepKind,
}

impl LessonStep {
    #[must_use]
    pub fn new(content: impl Into<String>, kind: LessonStepKind) -> Self {
        Self {
            title: None,
            content: content.into(),
            visual: None,
            audio: false,
            kind,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_visual(mut self, visual: impl Into<String>) -> Self {
        self.visual = Some(visual.into());
        self
    }

    #[must_use]
    pub fn with_audio(mut self) -> Self {
        self.audio = true;
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn visual(&self) -> Option<&str> {
        self.visual.as_deref()
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio
    }

    #[must_use]
    pub fn kind(&self) -> &LessonStepKind {
        &self.kind
    }
}

impl Step for LessonStep {
    fn modality(&self) -> Modality {
        match self.kind {
            LessonStepKind::Introduction => Modality::Introduction,
            LessonStepKind::FreeformAnswer { .. } => Modality::FreeformAnswer,
            LessonStepKind::SingleSelect { .. } => Modality::SingleSelect,
            LessonStepKind::MultiOptionGrid { .. } => Modality::MultiOptionGrid,
        }
    }

    fn prompt(&self) -> &str {
        &self.content
    }

    fn accepted_answer(&self) -> Option<&str> {
        match &self.kind {
            LessonStepKind::Introduction => None,
            LessonStepKind::FreeformAnswer { answer }
            | LessonStepKind::SingleSelect { answer, .. }
            | LessonStepKind::MultiOptionGrid { answer, .. } => Some(answer),
        }
    }

    fn options(&self) -> &[String] {
        match &self.kind {
            LessonStepKind::SingleSelect { options, .. }
            | LessonStepKind::MultiOptionGrid { options, .. } => options,
            LessonStepKind::Introduction | LessonStepKind::FreeformAnswer { .. } => &[],
        }
    }
}
