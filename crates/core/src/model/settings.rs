use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("quiz seconds per question must be between 1 and 600")]
    InvalidQuizSeconds,

    #[error("{field} must be between 100 and 60000 milliseconds")]
    InvalidRevealDelay { field: &'static str },
}

//
// ─── TIMING ────────────────────────────────────────────────────────────────────
//

/// Delays used by the lesson and quiz flows.
///
/// Lesson and quiz reveal windows differ on purpose; they stay separate knobs
/// rather than one shared delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    lesson_reveal_ms: u32,
    quiz_answer_reveal_ms: u32,
    quiz_timeout_reveal_ms: u32,
    quiz_seconds_per_question: u32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            lesson_reveal_ms: 2_000,
            quiz_answer_reveal_ms: 2_500,
            quiz_timeout_reveal_ms: 2_000,
            quiz_seconds_per_question: 30,
        }
    }
}

impl TimingSettings {
    /// Creates custom timing settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the countdown is outside 1..=600 seconds or any
    /// reveal delay is outside 100..=60000 ms.
    pub fn new(
        lesson_reveal_ms: u32,
        quiz_answer_reveal_ms: u32,
        quiz_timeout_reveal_ms: u32,
        quiz_seconds_per_question: u32,
    ) -> Result<Self, SettingsError> {
        if !(1..=600).contains(&quiz_seconds_per_question) {
            return Err(SettingsError::InvalidQuizSeconds);
        }
        for (field, value) in [
            ("lesson reveal delay", lesson_reveal_ms),
            ("quiz answer reveal delay", quiz_answer_reveal_ms),
            ("quiz timeout reveal delay", quiz_timeout_reveal_ms),
        ] {
            if !(100..=60_000).contains(&value) {
                return Err(SettingsError::InvalidRevealDelay { field });
            }
        }

        Ok(Self {
            lesson_reveal_ms,
            quiz_answer_reveal_ms,
            quiz_timeout_reveal_ms,
            quiz_seconds_per_question,
        })
    }

    #[must_use]
    pub fn lesson_reveal(&self) -> Duration {
        Duration::from_millis(u64::from(self.lesson_reveal_ms))
    }

    #[must_use]
    pub fn quiz_answer_reveal(&self) -> Duration {
        Duration::from_millis(u64::from(self.quiz_answer_reveal_ms))
    }

    #[must_use]
    pub fn quiz_timeout_reveal(&self) -> Duration {
        Duration::from_millis(u64::from(self.quiz_timeout_reveal_ms))
    }

    #[must_use]
    pub fn quiz_seconds_per_question(&self) -> u32 {
        self.quiz_seconds_per_question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_flow_timings() {
        let timing = TimingSettings::default();
        assert_eq!(timing.lesson_reveal(), Duration::from_secs(2));
        assert_eq!(timing.quiz_answer_reveal(), Duration::from_millis(2_500));
        assert_eq!(timing.quiz_timeout_reveal(), Duration::from_secs(2));
        assert_eq!(timing.quiz_seconds_per_question(), 30);
    }

    #[test]
    fn new_validates_ranges() {
        assert_eq!(
            TimingSettings::new(2_000, 2_500, 2_000, 0),
            Err(SettingsError::InvalidQuizSeconds)
        );
        assert_eq!(
            TimingSettings::new(50, 2_500, 2_000, 30),
            Err(SettingsError::InvalidRevealDelay {
                field: "lesson reveal delay"
            })
        );
        assert!(TimingSettings::new(100, 100, 100, 1).is_ok());
    }
}
