use std::time::Duration;

/// What a scheduled callback should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One second of the quiz countdown elapsed.
    Tick,
    /// The reveal window is over; move to the next step.
    Advance,
}

/// Identifies the exact session state a timer was scheduled for.
///
/// A ticket only applies while the session is still on the same generation, the
/// same step, and in the phase the timer kind expects. Anything else is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub(crate) generation: u64,
    pub(crate) index: usize,
    pub(crate) kind: TimerKind,
}

impl Ticket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A request to call `fire(ticket)` back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub ticket: Ticket,
    pub delay: Duration,
}
