use learn_core::model::{SessionSnapshot, Step, Summary};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::controller::StepSequenceController;
use super::timer::{Deferred, Ticket};
use crate::error::SessionError;

struct Pending {
    ticket: Ticket,
    handle: JoinHandle<()>,
}

/// Runs a controller's timers on the tokio clock.
///
/// At most one timer is outstanding. Scheduling a new one aborts the previous sleep,
/// and tickets that still slip through the channel are skipped.
pub struct SequenceDriver<S> {
    controller: StepSequenceController<S>,
    tx: mpsc::UnboundedSender<Ticket>,
    rx: mpsc::UnboundedReceiver<Ticket>,
    pending: Option<Pending>,
}

impl<S: Step> SequenceDriver<S> {
    /// Takes ownership of `controller` and arms its initial timer.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(controller: StepSequenceController<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let first = controller.begin();
        let mut driver = Self {
            controller,
            tx,
            rx,
            pending: None,
        };
        driver.schedule(first);
        driver
    }

    #[must_use]
    pub fn controller(&self) -> &StepSequenceController<S> {
        &self.controller
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.controller.snapshot()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.controller.summary()
    }

    /// Whether a timer is still outstanding.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// # Errors
    ///
    /// See [`StepSequenceController::stage_answer`].
    pub fn stage(&mut self, candidate: impl Into<String>) -> Result<(), SessionError> {
        self.controller.stage_answer(candidate)
    }

    /// # Errors
    ///
    /// See [`StepSequenceController::submit_answer`].
    pub fn submit(&mut self, candidate: Option<&str>) -> Result<(), SessionError> {
        let next = self.controller.submit_answer(candidate)?;
        self.schedule(Some(next));
        Ok(())
    }

    /// # Errors
    ///
    /// See [`StepSequenceController::submit_staged`].
    pub fn submit_staged(&mut self) -> Result<(), SessionError> {
        let next = self.controller.submit_staged()?;
        self.schedule(Some(next));
        Ok(())
    }

    pub fn restart(&mut self) {
        let next = self.controller.restart();
        self.schedule(next);
    }

    /// Cancels any outstanding timer and asks the host to navigate home.
    pub fn exit(mut self) {
        self.cancel();
        self.controller.exit();
    }

    /// Waits for the outstanding timer and applies it.
    ///
    /// Returns the state after the timer fired, or `None` when nothing is scheduled.
    pub async fn next_event(&mut self) -> Option<SessionSnapshot> {
        loop {
            let expected = self.pending.as_ref()?.ticket;
            let ticket = self.rx.recv().await?;
            if ticket != expected {
                trace!(?ticket, "skipping superseded timer");
                continue;
            }
            self.pending = None;
            let next = self.controller.fire(ticket);
            self.schedule(next);
            return Some(self.controller.snapshot());
        }
    }

    /// Lets timers run until nothing is scheduled.
    ///
    /// For quizzes every question eventually times out, so this always ends in a
    /// summary. For lessons it returns once the pending reveal (if any) has elapsed.
    pub async fn run_to_completion(&mut self) -> Option<&Summary> {
        while self.next_event().await.is_some() {}
        self.controller.summary()
    }

    fn schedule(&mut self, next: Option<Deferred>) {
        self.cancel();
        let Some(Deferred { ticket, delay }) = next else {
            return;
        };
        trace!(?ticket, ?delay, "scheduling timer");
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ticket);
        });
        self.pending = Some(Pending { ticket, handle });
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

impl<S> Drop for SequenceDriver<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
