use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
/// Coarse bucket for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// 80% and above.
    Top,
    /// 60% up to 80%.
    Mid,
    /// Below 60%.
    Base,
}

impl Tier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Tier::Top
        } else if percentage >= 60 {
            Tier::Mid
        } else {
            Tier::Base
        }
    }

    /// Stars awarded in the completion notice.
    #[must_use]
    pub fn stars(self) -> u8 {
        match self {
            Tier::Top => 3,
            Tier::Mid => 2,
            Tier::Base => 1,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Tier::Top => "Amazing work!",
            Tier::Mid => "Great job!",
            Tier::Base => "Keep practicing!",
        }
    }

    fn praise(self) -> &'static str {
        match self {
            Tier::Top => "Amazing!",
            Tier::Mid => "Great job!",
            Tier::Base => "Good effort!",
        }
    }
}

/// `round(100 * score / total)` with halves rounded up, in integer math.
///
/// Returns 0 for an empty sequence.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let rounded = (200 * score + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Final figures of a completed lesson or quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    score: u32,
    total: u32,
    percentage: u32,
    tier: Option<Tier>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl Summary {
    /// Builds a summary; `tiered` is false for lessons.
    ///
    /// The figures depend only on `score` and `total`. A score above the total is
    /// capped, and a completion stamp earlier than the start (wall clock stepped
    /// back) is pinned to the start.
    #[must_use]
    pub fn new(
        score: u32,
        total: u32,
        tiered: bool,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let score = score.min(total);
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: tiered.then(|| Tier::from_percentage(percentage)),
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Five-star rating: one star lost per fifth of the steps missed.
    #[must_use]
    pub fn rating_stars(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let missed = u64::from(self.total - self.score);
        let lost = (missed * 5) / u64::from(self.total);
        u8::try_from(5 - lost.min(5)).unwrap_or(0)
    }

    /// Completion message, e.g. `Great job! 60% correct! ⭐⭐`.
    #[must_use]
    pub fn completion_message(&self) -> Option<String> {
        let tier = self.tier?;
        let stars = "⭐".repeat(usize::from(tier.stars()));
        Some(format!(
            "{} {}% correct! {stars}",
            tier.praise(),
            self.percentage
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn quiz_summary(score: u32, total: u32) -> Summary {
        let now = fixed_now();
        Summary::new(score, total, true, now, now)
    }

    #[test]
    fn tier_boundaries_for_five_questions() {
        assert_eq!(quiz_summary(4, 5).percentage(), 80);
        assert_eq!(quiz_summary(4, 5).tier(), Some(Tier::Top));
        assert_eq!(quiz_summary(3, 5).percentage(), 60);
        assert_eq!(quiz_summary(3, 5).tier(), Some(Tier::Mid));
        assert_eq!(quiz_summary(2, 5).percentage(), 40);
        assert_eq!(quiz_summary(2, 5).tier(), Some(Tier::Base));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(4, 4), 100);
        assert_eq!(percentage(1, 0), 0);
    }

    #[test]
    fn tier_is_pure_in_percentage() {
        assert_eq!(Tier::from_percentage(100), Tier::Top);
        assert_eq!(Tier::from_percentage(79), Tier::Mid);
        assert_eq!(Tier::from_percentage(59), Tier::Base);
        assert_eq!(Tier::from_percentage(0), Tier::Base);
    }

    #[test]
    fn lesson_summary_has_no_tier() {
        let now = fixed_now();
        let summary = Summary::new(3, 4, false, now, now);
        assert_eq!(summary.tier(), None);
        assert_eq!(summary.completion_message(), None);
        assert_eq!(summary.percentage(), 75);
    }

    #[test]
    fn completion_message_matches_tier() {
        assert_eq!(
            quiz_summary(5, 5).completion_message().as_deref(),
            Some("Amazing! 100% correct! ⭐⭐⭐")
        );
        assert_eq!(
            quiz_summary(3, 5).completion_message().as_deref(),
            Some("Great job! 60% correct! ⭐⭐")
        );
        assert_eq!(
            quiz_summary(1, 5).completion_message().as_deref(),
            Some("Good effort! 20% correct! ⭐")
        );
    }

    #[test]
    fn rating_stars_drop_per_missed_fifth() {
        assert_eq!(quiz_summary(5, 5).rating_stars(), 5);
        assert_eq!(quiz_summary(3, 5).rating_stars(), 3);
        assert_eq!(quiz_summary(0, 5).rating_stars(), 0);
        assert_eq!(quiz_summary(3, 4).rating_stars(), 4);
    }

    #[test]
    fn clamps_inconsistent_input() {
        let now = fixed_now();
        let empty = Summary::new(0, 0, true, now, now);
        assert_eq!(empty.percentage(), 0);
        assert_eq!(empty.rating_stars(), 0);

        let over = Summary::new(6, 5, true, now, now);
        assert_eq!(over.score(), 5);
        assert_eq!(over.percentage(), 100);
    }

    #[test]
    fn completion_before_start_is_pinned_to_start() {
        let now = fixed_now();
        let summary = Summary::new(3, 5, true, now, now - chrono::Duration::seconds(5));
        assert_eq!(summary.completed_at(), now);
        assert_eq!(summary.started_at(), now);
        assert_eq!(summary.tier(), Some(Tier::Mid));
        assert_eq!(
            summary.completion_message().as_deref(),
            Some("Great job! 60% correct! ⭐⭐")
        );
    }
}
