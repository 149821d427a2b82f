use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use learn_core::Clock;
use learn_core::model::{
    AnswerError, LessonStep, Phase, QuizQuestion, Session, SessionSnapshot, Step, Summary,
    TimingSettings,
};
use tracing::{debug, info};

use super::progress::SessionProgress;
use super::timer::{Deferred, Ticket, TimerKind};
use crate::collaborators::{Collaborators, Destination, Notice};
use crate::error::SessionError;

const TICK: Duration = Duration::from_secs(1);

/// Which flow a controller drives.
///
/// Quizzes are timed, announce notices, and end with a tiered summary. Lessons are
/// untimed and hand control back to the host when the last step is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMode {
    Lesson,
    Quiz,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Linear progression through an ordered list of steps.
///
/// The controller never waits. Operations that need a delay return a [`Deferred`];
/// the host sleeps for `delay` and hands the ticket back through [`fire`](Self::fire).
/// Tickets from an earlier generation, step, or phase are ignored, so a late timer
/// can never touch a restarted or discarded session.
pub struct StepSequenceController<S> {
    steps: Arc<[S]>,
    mode: SequenceMode,
    timing: TimingSettings,
    clock: Clock,
    session: Session,
    generation: u64,
    reveal_delay: Duration,
    summary: Option<Summary>,
    collaborators: Collaborators,
}

pub type LessonController = StepSequenceController<LessonStep>;
pub type QuizController = StepSequenceController<QuizQuestion>;

impl<S: Step> StepSequenceController<S> {
    /// Untimed lesson flow.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for no steps and `SessionError::Malformed` for
    /// the first step that fails validation.
    pub fn lesson(
        steps: impl Into<Arc<[S]>>,
        timing: TimingSettings,
        clock: Clock,
        collaborators: Collaborators,
    ) -> Result<Self, SessionError> {
        Self::new(steps.into(), SequenceMode::Lesson, timing, clock, collaborators)
    }

    /// Timed quiz flow with a per-question countdown.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for no steps and `SessionError::Malformed` for
    /// the first step that fails validation.
    pub fn quiz(
        steps: impl Into<Arc<[S]>>,
        timing: TimingSettings,
        clock: Clock,
        collaborators: Collaborators,
    ) -> Result<Self, SessionError> {
        Self::new(steps.into(), SequenceMode::Quiz, timing, clock, collaborators)
    }

    fn new(
        steps: Arc<[S]>,
        mode: SequenceMode,
        timing: TimingSettings,
        clock: Clock,
        collaborators: Collaborators,
    ) -> Result<Self, SessionError> {
        if steps.is_empty() {
            return Err(SessionError::Empty);
        }
        for (index, step) in steps.iter().enumerate() {
            step.validate()
                .map_err(|source| SessionError::Malformed { index, source })?;
        }

        let budget = match mode {
            SequenceMode::Quiz => Some(timing.quiz_seconds_per_question()),
            SequenceMode::Lesson => None,
        };
        let session = Session::new(steps.len(), budget, clock.now());

        Ok(Self {
            steps,
            mode,
            timing,
            clock,
            session,
            generation: 0,
            reveal_delay: Duration::ZERO,
            summary: None,
            collaborators,
        })
    }

    #[must_use]
    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    #[must_use]
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&S> {
        self.steps.get(self.session.current_index())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_terminal()
    }

    /// Final figures, available once the session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Bumped on every restart or exit.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_session(&self.session)
    }

    /// The timer the host should have running for the current state.
    ///
    /// Call once after construction and whenever the host (re)attaches. Calling it
    /// repeatedly while a timer is outstanding would start a second countdown.
    #[must_use]
    pub fn begin(&self) -> Option<Deferred> {
        match self.session.phase() {
            Phase::Answering => self.countdown(),
            Phase::Revealing => Some(self.deferred(TimerKind::Advance, self.reveal_delay)),
            Phase::Complete => None,
        }
    }

    /// Keeps an unsubmitted answer for the current step.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` while feedback is shown and
    /// `SessionError::Completed` once the session is over.
    pub fn stage_answer(&mut self, candidate: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_answering()?;
        self.session.stage_answer(candidate.into());
        Ok(())
    }

    /// Submits whatever answer is currently staged.
    ///
    /// # Errors
    ///
    /// Same as [`submit_answer`](Self::submit_answer).
    pub fn submit_staged(&mut self) -> Result<Deferred, SessionError> {
        let staged = self.session.pending_answer().map(str::to_owned);
        self.submit_answer(staged.as_deref())
    }

    /// Grades `candidate` against the current step and opens the reveal window.
    ///
    /// Returns the auto-advance the host must schedule.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingAnswer` without touching the session when the
    /// step needs an answer and none was given. Returns
    /// `SessionError::AlreadyAnswered` or `SessionError::Completed` outside the
    /// answering phase.
    pub fn submit_answer(&mut self, candidate: Option<&str>) -> Result<Deferred, SessionError> {
        self.ensure_answering()?;
        let index = self.session.current_index();
        let step = &self.steps[index];

        let correct = match step.check(candidate) {
            Ok(correct) => correct,
            Err(AnswerError::Missing) => {
                debug!(index, modality = %step.modality(), "rejected submit without an answer");
                self.announce(Notice::MissingAnswer);
                return Err(SessionError::MissingAnswer);
            }
        };

        self.announce(if correct {
            Notice::Correct
        } else {
            Notice::Incorrect
        });
        let delay = match self.mode {
            SequenceMode::Lesson => self.timing.lesson_reveal(),
            SequenceMode::Quiz => self.timing.quiz_answer_reveal(),
        };
        Ok(self.reveal(correct, delay))
    }

    /// Records the current question as missed because its countdown ran out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Untimed` for lessons, and the usual phase errors.
    pub fn on_time_expired(&mut self) -> Result<Deferred, SessionError> {
        self.ensure_timed_answering()?;
        Ok(self.expire())
    }

    /// One second of countdown. Expires the question when it reaches zero.
    ///
    /// Returns the next timer: another tick, or the auto-advance after expiry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Untimed` for lessons, and the usual phase errors.
    pub fn tick(&mut self) -> Result<Deferred, SessionError> {
        self.ensure_timed_answering()?;
        Ok(self.count_down())
    }

    /// Leaves the reveal window: next step, or completion after the last one.
    ///
    /// Returns the countdown for the next question, if the flow is timed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotRevealing` while answering and
    /// `SessionError::Completed` once complete.
    pub fn advance(&mut self) -> Result<Option<Deferred>, SessionError> {
        match self.session.phase() {
            Phase::Revealing => Ok(self.leave_reveal()),
            Phase::Complete => Err(SessionError::Completed),
            phase @ Phase::Answering => Err(SessionError::NotRevealing { phase }),
        }
    }

    /// Dispatches a timer the host scheduled earlier.
    ///
    /// Stale tickets are dropped and yield `None`. A current ticket always applies.
    pub fn fire(&mut self, ticket: Ticket) -> Option<Deferred> {
        if !self.is_current(ticket) {
            debug!(
                ticket_generation = ticket.generation,
                ticket_index = ticket.index,
                kind = ?ticket.kind,
                generation = self.generation,
                "dropping stale timer"
            );
            return None;
        }

        match ticket.kind {
            TimerKind::Tick => Some(self.count_down()),
            TimerKind::Advance => self.leave_reveal(),
        }
    }

    /// Back to the first step with a clean score. Legal in every phase.
    ///
    /// Returns the countdown to schedule for the fresh session, if timed.
    pub fn restart(&mut self) -> Option<Deferred> {
        self.generation += 1;
        self.session.reset(self.clock.now());
        self.summary = None;
        self.reveal_delay = Duration::ZERO;
        debug!(generation = self.generation, "session restarted");
        self.countdown()
    }

    /// Abandons the session and asks the host to go home.
    pub fn exit(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "session exited");
        self.collaborators.navigator.leave(Destination::Home);
    }

    fn ensure_answering(&self) -> Result<(), SessionError> {
        match self.session.phase() {
            Phase::Answering => Ok(()),
            Phase::Revealing => Err(SessionError::AlreadyAnswered),
            Phase::Complete => Err(SessionError::Completed),
        }
    }

    fn ensure_timed_answering(&self) -> Result<(), SessionError> {
        self.ensure_answering()?;
        if self.session.time_budget().is_none() {
            return Err(SessionError::Untimed);
        }
        Ok(())
    }

    // Callers have checked the session is timed and answering.
    fn count_down(&mut self) -> Deferred {
        match self.session.tick() {
            Some(remaining) if remaining > 0 => self.deferred(TimerKind::Tick, TICK),
            _ => self.expire(),
        }
    }

    fn expire(&mut self) -> Deferred {
        debug!(index = self.session.current_index(), "time expired");
        self.reveal(false, self.timing.quiz_timeout_reveal())
    }

    // Callers have checked the session is revealing.
    fn leave_reveal(&mut self) -> Option<Deferred> {
        if self.session.advance(self.clock.now()) {
            self.finish();
            return None;
        }
        debug!(index = self.session.current_index(), "advanced to next step");
        self.countdown()
    }

    fn reveal(&mut self, correct: bool, delay: Duration) -> Deferred {
        self.session.record(correct);
        self.reveal_delay = delay;
        debug!(
            index = self.session.current_index(),
            correct,
            score = self.session.score(),
            "answer recorded"
        );
        self.deferred(TimerKind::Advance, delay)
    }

    fn finish(&mut self) {
        let started_at = self.session.started_at();
        let completed_at = self.session.completed_at().unwrap_or(started_at);
        let total = u32::try_from(self.session.total()).unwrap_or(u32::MAX);
        let summary = Summary::new(
            self.session.score(),
            total,
            self.mode == SequenceMode::Quiz,
            started_at,
            completed_at,
        );
        info!(
            score = summary.score(),
            total = summary.total(),
            percentage = summary.percentage(),
            tier = ?summary.tier(),
            "sequence complete"
        );

        match self.mode {
            SequenceMode::Quiz => {
                if let Some(message) = summary.completion_message() {
                    self.announce(Notice::Completed { message });
                }
            }
            SequenceMode::Lesson => self.collaborators.navigator.leave(Destination::Home),
        }
        self.summary = Some(summary);
    }

    fn announce(&self, notice: Notice) {
        if self.mode == SequenceMode::Quiz {
            self.collaborators.notifier.notify(notice);
        }
    }

    fn countdown(&self) -> Option<Deferred> {
        let timed = self.session.time_budget().is_some();
        (timed && self.session.phase() == Phase::Answering)
            .then(|| self.deferred(TimerKind::Tick, TICK))
    }

    fn deferred(&self, kind: TimerKind, delay: Duration) -> Deferred {
        Deferred {
            ticket: Ticket {
                generation: self.generation,
                index: self.session.current_index(),
                kind,
            },
            delay,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation || ticket.index != self.session.current_index()
        {
            return false;
        }
        match ticket.kind {
            TimerKind::Tick => {
                self.session.phase() == Phase::Answering && self.session.time_budget().is_some()
            }
            TimerKind::Advance => self.session.phase() == Phase::Revealing,
        }
    }
}

impl<S> fmt::Debug for StepSequenceController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSequenceController")
            .field("mode", &self.mode)
            .field("steps_len", &self.steps.len())
            .field("session", &self.session)
            .field("generation", &self.generation)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}
