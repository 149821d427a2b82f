mod catalog_vm;
mod lesson_vm;
mod quiz_vm;

pub use catalog_vm::{FilterChipVm, HomeVm, LessonCardVm, StatTileVm, map_home};
pub use lesson_vm::{FeedbackVm, LessonVm, StepInputVm};
pub use quiz_vm::{LOW_TIME_SECS, OptionVm, QuestionVm, QuizScreen, ResultRowVm, ResultsVm};
