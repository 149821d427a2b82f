use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a session sits in the answer → reveal → advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the learner to answer the current step.
    Answering,
    /// Feedback for the current step is on screen until the auto-advance.
    Revealing,
    /// Past the last step; only a restart leaves this phase.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable run-through of a step sequence.
///
/// Keeps the bookkeeping invariants local: outcomes are append-only, `score`
/// always equals the number of `true` outcomes, and `result_visible` is only set
/// between recording an outcome and advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    total: usize,
    current_index: usize,
    score: u32,
    outcomes: Vec<bool>,
    pending_answer: Option<String>,
    result_visible: bool,
    time_budget: Option<u32>,
    remaining_secs: Option<u32>,
    terminal: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Starts a session over `total` steps. `time_budget` is the per-step
    /// countdown in seconds, or `None` for untimed sequences.
    #[must_use]
    pub fn new(total: usize, time_budget: Option<u32>, started_at: DateTime<Utc>) -> Self {
        Self {
            total,
            current_index: 0,
            score: 0,
            outcomes: Vec::with_capacity(total),
            pending_answer: None,
            result_visible: false,
            time_budget,
            remaining_secs: time_budget,
            terminal: false,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    #[must_use]
    pub fn pending_answer(&self) -> Option<&str> {
        self.pending_answer.as_deref()
    }

    #[must_use]
    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub fn time_budget(&self) -> Option<u32> {
        self.time_budget
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.terminal {
            Phase::Complete
        } else if self.result_visible {
            Phase::Revealing
        } else {
            Phase::Answering
        }
    }

    /// Outcome recorded for the current step, if it has been answered.
    #[must_use]
    pub fn current_outcome(&self) -> Option<bool> {
        if self.terminal {
            return None;
        }
        self.outcomes.get(self.current_index).copied()
    }

    pub fn stage_answer(&mut self, candidate: String) {
        self.pending_answer = Some(candidate);
    }

    /// Appends the outcome for the current step and opens the reveal window.
    pub fn record(&mut self, correct: bool) {
        debug_assert_eq!(self.phase(), Phase::Answering);
        self.outcomes.push(correct);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.result_visible = true;
    }

    /// Counts the current step's countdown down by one second.
    ///
    /// Returns the seconds left, or `None` when the session is untimed.
    pub fn tick(&mut self) -> Option<u32> {
        let remaining = self.remaining_secs.as_mut()?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }

    /// Moves past the revealed step. Returns `true` when this completed the session.
    pub fn advance(&mut self, now: DateTime<Utc>) -> bool {
        debug_assert_eq!(self.phase(), Phase::Revealing);
        if self.current_index + 1 < self.total {
            self.current_index += 1;
            self.pending_answer = None;
            self.result_visible = false;
            self.remaining_secs = self.time_budget;
            false
        } else {
            // Index moves past the last step; the reveal window stays closed.
            self.current_index = self.total;
            self.result_visible = false;
            self.pending_answer = None;
            self.terminal = true;
            self.completed_at = Some(now.max(self.started_at));
            true
        }
    }

    /// Rewinds to start-of-sequence values.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        *self = Self::new(self.total, self.time_budget, started_at);
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current_index,
            total: self.total,
            score: self.score,
            outcomes: self.outcomes.clone(),
            pending_answer: self.pending_answer.clone(),
            result_visible: self.result_visible,
            remaining_secs: self.remaining_secs,
            terminal: self.terminal,
            phase: self.phase(),
            current_outcome: self.current_outcome(),
        }
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read-only copy of a session handed to presentation code after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub total: usize,
    pub score: u32,
    pub outcomes: Vec<bool>,
    pub pending_answer: Option<String>,
    pub result_visible: bool,
    pub remaining_secs: Option<u32>,
    pub terminal: bool,
    pub phase: Phase,
    pub current_outcome: Option<bool>,
}

impl SessionSnapshot {
    /// 1-based step number, clamped to the last step once complete.
    #[must_use]
    pub fn step_number(&self) -> usize {
        (self.current_index + 1).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn outcomes_track_index_through_a_run() {
        let now = fixed_now();
        let mut session = Session::new(2, None, now);
        assert_eq!(session.phase(), Phase::Answering);
        assert_eq!(session.outcomes().len(), session.current_index());

        session.record(true);
        assert_eq!(session.phase(), Phase::Revealing);
        assert_eq!(session.current_outcome(), Some(true));
        assert!(!session.advance(now));
        assert_eq!(session.outcomes().len(), session.current_index());

        session.record(false);
        assert!(session.advance(now));
        assert!(session.is_terminal());
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.outcomes(), &[true, false]);
        assert_eq!(session.outcomes().len(), session.total());
        assert_eq!(session.score(), 1);
        assert_eq!(session.completed_at(), Some(now));
    }

    #[test]
    fn completion_stamp_never_precedes_start() {
        let now = fixed_now();
        let mut session = Session::new(1, Some(30), now);
        session.record(true);
        assert!(session.advance(now - chrono::Duration::seconds(5)));
        assert_eq!(session.completed_at(), Some(now));
    }

    #[test]
    fn advance_clears_pending_and_resets_countdown() {
        let now = fixed_now();
        let mut session = Session::new(3, Some(30), now);
        session.stage_answer("5".into());
        assert_eq!(session.tick(), Some(29));
        session.record(false);
        session.advance(now);
        assert_eq!(session.pending_answer(), None);
        assert_eq!(session.remaining_secs(), Some(30));
        assert!(!session.result_visible());
    }

    #[test]
    fn untimed_sessions_do_not_tick() {
        let mut session = Session::new(1, None, fixed_now());
        assert_eq!(session.tick(), None);
        assert_eq!(session.remaining_secs(), None);
    }

    #[test]
    fn reset_rewinds_everything() {
        let now = fixed_now();
        let mut session = Session::new(1, Some(10), now);
        session.tick();
        session.record(true);
        session.advance(now);
        let later = now + chrono::Duration::seconds(5);
        session.reset(later);
        assert_eq!(session, Session::new(1, Some(10), later));
    }

    #[test]
    fn snapshot_mirrors_fields() {
        let now = fixed_now();
        let mut session = Session::new(4, Some(30), now);
        session.stage_answer("3".into());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.pending_answer.as_deref(), Some("3"));
        assert_eq!(snapshot.remaining_secs, Some(30));
        assert_eq!(snapshot.step_number(), 1);
        assert_eq!(snapshot.phase, Phase::Answering);
        assert_eq!(snapshot.current_outcome, None);
    }
}
