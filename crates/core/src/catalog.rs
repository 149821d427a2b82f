//! Built-in lesson and quiz content.
//!
//! Everything here is literal data loaded once; nothing mutates it afterwards.

use thiserror::Error;

use crate::model::{
    Achievement, Difficulty, LearnerStats, LessonCard, LessonFlow, LessonId, LessonStep,
    LessonStepKind, QuestionId, QuizQuestion, Subject, SubjectFilter,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no lesson with id {0}")]
    UnknownLesson(LessonId),

    #[error("lesson {0} has no guided flow yet")]
    NoFlow(LessonId),
}

/// Immutable content backing the home screen, lessons and the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    lessons: Vec<LessonCard>,
    numbers_lesson: Vec<LessonStep>,
    quiz: Vec<QuizQuestion>,
    achievements: Vec<Achievement>,
    stats: LearnerStats,
}

impl ContentCatalog {
    /// The catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            lessons: builtin_lessons(),
            numbers_lesson: numbers_lesson_steps(),
            quiz: builtin_quiz(),
            achievements: builtin_achievements(),
            stats: LearnerStats {
                points: 125,
                lessons_completed: 12,
                quizzes_taken: 25,
                days_active: 8,
            },
        }
    }

    /// Subject filters in display order, starting with "All Subjects".
    #[must_use]
    pub fn filters(&self) -> Vec<SubjectFilter> {
        std::iter::once(SubjectFilter::All)
            .chain(Subject::ALL.into_iter().map(SubjectFilter::Only))
            .collect()
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonCard] {
        &self.lessons
    }

    #[must_use]
    pub fn lessons_in(&self, filter: SubjectFilter) -> Vec<&LessonCard> {
        self.lessons
            .iter()
            .filter(|lesson| filter.matches(lesson.subject))
            .collect()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLesson` if no card has this id.
    pub fn lesson(&self, id: LessonId) -> Result<&LessonCard, CatalogError> {
        self.lessons
            .iter()
            .find(|lesson| lesson.id == id)
            .ok_or(CatalogError::UnknownLesson(id))
    }

    /// Steps of the guided flow opened by a lesson card.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLesson` for an unknown id and
    /// `CatalogError::NoFlow` when the card has no guided flow.
    pub fn lesson_steps(&self, id: LessonId) -> Result<&[LessonStep], CatalogError> {
        let lesson = self.lesson(id)?;
        match lesson.flow {
            Some(LessonFlow::Numbers) => Ok(&self.numbers_lesson),
            None => Err(CatalogError::NoFlow(id)),
        }
    }

    #[must_use]
    pub fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn stats(&self) -> LearnerStats {
        self.stats
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: u64,
    title: &str,
    subject: Subject,
    description: &str,
    difficulty: Difficulty,
    duration_mins: u32,
    completed: bool,
    icon: &str,
) -> LessonCard {
    LessonCard {
        id: LessonId::new(id),
        title: title.to_string(),
        subject,
        description: description.to_string(),
        difficulty,
        duration_mins,
        completed,
        icon: icon.to_string(),
        flow: (subject == Subject::Math).then_some(LessonFlow::Numbers),
    }
}

fn builtin_lessons() -> Vec<LessonCard> {
    vec![
        card(
            1,
            "Counting to 20",
            Subject::Math,
            "Learn numbers and counting with fun animals!",
            Difficulty::Easy,
            10,
            true,
            "🦁",
        ),
        card(
            2,
            "Butterfly Life Cycle",
            Subject::Science,
            "Discover how butterflies grow and change!",
            Difficulty::Easy,
            15,
            false,
            "🦋",
        ),
        card(
            3,
            "ABC Adventures",
            Subject::Reading,
            "Meet the alphabet with silly characters!",
            Difficulty::Easy,
            20,
            false,
            "🎭",
        ),
        card(
            4,
            "Shapes Everywhere",
            Subject::Math,
            "Find shapes in the world around us!",
            Difficulty::Easy,
            12,
            false,
            "🔺",
        ),
        card(
            5,
            "Plant Growth",
            Subject::Science,
            "Watch our seeds sprout and grow!",
            Difficulty::Medium,
            25,
            true,
            "🌱",
        ),
        card(
            6,
            "Color Mixing Magic",
            Subject::Art,
            "Create new colors with primary colors!",
            Difficulty::Easy,
            18,
            false,
            "🌈",
        ),
    ]
}

fn numbers_lesson_steps() -> Vec<LessonStep> {
    vec![
        LessonStep::new(
            "Let's learn about numbers from 1 to 5!",
            LessonStepKind::Introduction,
        )
        .with_title("Numbers 1-5")
        .with_visual("12345")
        .with_audio(),
        LessonStep::new(
            "Count the fish: 🐟🐟🐟 How many fish do you see?",
            LessonStepKind::FreeformAnswer { answer: "3".into() },
        )
        .with_title("Counting Fish")
        .with_visual("🐟🐟🐟"),
        LessonStep::new(
            "How many apples are there? 🍎🍎🍎🍎",
            LessonStepKind::SingleSelect {
                options: strings(&["3", "4", "5"]),
                answer: "4".into(),
            },
        ),
        LessonStep::new(
            "Match the numbers to the pictures!",
            LessonStepKind::MultiOptionGrid {
                options: strings(&["1", "2", "3", "4"]),
                answer: "2".into(),
            },
        )
        .with_title("Number Matching")
        .with_visual("🐞🐞"),
    ]
}

fn builtin_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            QuestionId::new(1),
            "How many fingers do you have on one hand? 🖐️",
            strings(&["3", "5", "4", "6"]),
            "5",
            "We have 5 fingers on each hand!",
            Difficulty::Easy,
            "Math",
        ),
        QuizQuestion::new(
            QuestionId::new(2),
            "What color do you get when you mix red and yellow? 🎨",
            strings(&["Green", "Purple", "Orange", "Blue"]),
            "Orange",
            "Red and yellow make orange!",
            Difficulty::Easy,
            "Art",
        ),
        QuizQuestion::new(
            QuestionId::new(3),
            "Which animal says 'meow'? 🐱",
            strings(&["Dog", "Cat", "Cow", "Sheep"]),
            "Cat",
            "Cats say meow!",
            Difficulty::Easy,
            "Animals",
        ),
        QuizQuestion::new(
            QuestionId::new(4),
            "How many days are in a week? 📅",
            strings(&["5", "6", "7", "8"]),
            "7",
            "There are 7 days in a week!",
            Difficulty::Medium,
            "Time",
        ),
        QuizQuestion::new(
            QuestionId::new(5),
            "What do plants need to grow? 🌱",
            strings(&["Water and sunshine", "Candy", "Ice cream", "Toys"]),
            "Water and sunshine",
            "Plants need water, sunshine, and air to grow!",
            Difficulty::Medium,
            "Science",
        ),
    ]
}

fn builtin_achievements() -> Vec<Achievement> {
    [
        ("First Lesson", "🎯", true),
        ("Quiz Master", "🏆", true),
        ("Speed Learner", "⚡", false),
        ("Perfect Score", "💯", false),
    ]
    .into_iter()
    .map(|(name, icon, earned)| Achievement {
        name: name.to_string(),
        icon: icon.to_string(),
        earned,
    })
    .collect()
}
