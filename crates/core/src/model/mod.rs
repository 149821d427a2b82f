mod ids;
mod lesson;
mod question;
mod session;
mod settings;
mod step;
mod summary;

pub use ids::{LessonId, ParseIdError, QuestionId};

pub use lesson::{Achievement, LearnerStats, LessonCard, LessonFlow, Subject, SubjectFilter};
pub use question::{Difficulty, QuizQuestion};
pub use session::{Phase, Session, SessionSnapshot};
pub use settings::{SettingsError, TimingSettings};
pub use step::{AnswerError, LessonStep, LessonStepKind, Modality, Step, StepError};
pub use summary::{Summary, Tier, percentage};
