//! Outbound seams: transient notices and navigation requests.
//!
//! The controller only announces intent. Showing, timing out, or dismissing a notice
//! and performing a page transition all belong to the host.

use serde::Serialize;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Advisory message emitted by quiz flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    Correct,
    Incorrect,
    MissingAnswer,
    Completed { message: String },
}

impl Notice {
    #[must_use]
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Correct | Notice::Completed { .. } => NoticeLevel::Success,
            Notice::Incorrect | Notice::MissingAnswer => NoticeLevel::Error,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Notice::Correct => "Correct! Great job! 🎉",
            Notice::Incorrect => "Not quite right, but keep trying! 💪",
            Notice::MissingAnswer => "Please select an answer! 🎯",
            Notice::Completed { message } => message,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Where the host should take the learner when a flow is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Destination {
    Home,
}

pub trait Navigator {
    fn leave(&self, destination: Destination);
}

/// Notifier/navigator that drops everything; the default for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Notifier for Discard {
    fn notify(&self, _notice: Notice) {}
}

impl Navigator for Discard {
    fn leave(&self, _destination: Destination) {}
}

/// The host-side handlers a controller reports to.
pub struct Collaborators {
    pub notifier: Box<dyn Notifier>,
    pub navigator: Box<dyn Navigator>,
}

impl Collaborators {
    #[must_use]
    pub fn new(notifier: impl Notifier + 'static, navigator: impl Navigator + 'static) -> Self {
        Self {
            notifier: Box::new(notifier),
            navigator: Box::new(navigator),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::new(Discard, Discard)
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_levels_and_messages() {
        assert_eq!(Notice::Correct.level(), NoticeLevel::Success);
        assert_eq!(Notice::MissingAnswer.level(), NoticeLevel::Error);
        let done = Notice::Completed {
            message: "Great job! 60% correct! ⭐⭐".into(),
        };
        assert_eq!(done.message(), "Great job! 60% correct! ⭐⭐");
        assert_eq!(done.level(), NoticeLevel::Success);
    }
}
