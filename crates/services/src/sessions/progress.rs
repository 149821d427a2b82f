use learn_core::model::Session;

/// Aggregated view of sequence progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
    /// Position of the step on screen, as a whole percentage of the sequence.
    pub percent: u32,
}

impl SessionProgress {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let total = session.total();
        let answered = session.outcomes().len();
        let shown = (session.current_index() + 1).min(total);
        let percent = if total == 0 {
            0
        } else {
            u32::try_from(shown * 100 / total).unwrap_or(100)
        };

        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: session.is_terminal(),
            percent,
        }
    }
}
