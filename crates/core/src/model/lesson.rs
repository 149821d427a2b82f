use serde::{Deserialize, Serialize};

use crate::model::ids::LessonId;
use crate::model::question::Difficulty;

/// Subject a lesson belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    Reading,
    Art,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::Science,
        Subject::Reading,
        Subject::Art,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Reading => "reading",
            Subject::Art => "art",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.slug() == slug)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::Reading => "Reading",
            Subject::Art => "Art",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Subject::Math => "🔢",
            Subject::Science => "🔬",
            Subject::Reading => "📚",
            Subject::Art => "🎨",
        }
    }
}

/// Catalog filter: everything, or a single subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubjectFilter {
    #[default]
    All,
    Only(Subject),
}

impl SubjectFilter {
    #[must_use]
    pub fn matches(self, subject: Subject) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(only) => only == subject,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SubjectFilter::All => "all",
            SubjectFilter::Only(subject) => subject.slug(),
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug == "all" {
            return Some(SubjectFilter::All);
        }
        Subject::from_slug(slug).map(SubjectFilter::Only)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SubjectFilter::All => "All Subjects",
            SubjectFilter::Only(subject) => subject.name(),
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            SubjectFilter::All => "🌟",
            SubjectFilter::Only(subject) => subject.icon(),
        }
    }
}

/// Which guided flow a lesson card opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonFlow {
    Numbers,
}

/// An entry of the lesson catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCard {
    pub id: LessonId,
    pub title: String,
    pub subject: Subject,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_mins: u32,
    pub completed: bool,
    pub icon: String,
    pub flow: Option<LessonFlow>,
}

impl LessonCard {
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_mins)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub icon: String,
    pub earned: bool,
}

/// Headline progress figures shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerStats {
    pub points: u32,
    pub lessons_completed: u32,
    pub quizzes_taken: u32,
    pub days_active: u32,
}
