mod controller;
mod driver;
mod progress;
mod timer;

// Public API of the sequence subsystem.
pub use crate::error::SessionError;
pub use controller::{LessonController, QuizController, SequenceMode, StepSequenceController};
pub use driver::SequenceDriver;
pub use progress::SessionProgress;
pub use timer::{Deferred, Ticket, TimerKind};
