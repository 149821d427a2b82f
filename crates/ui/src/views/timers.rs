use dioxus::prelude::*;
use learn_core::model::Step;
use services::{Deferred, SessionError, StepSequenceController};
use tracing::debug;

pub type FlowSignal<S> = Signal<Option<StepSequenceController<S>>>;

/// Runs a controller's timer chain on the component's task scope.
///
/// Each firing may hand back the next timer; the chain ends when the controller
/// answers with nothing, which is also what a superseded ticket yields. Tasks die with
/// the component, so leaving the page stops every pending timer.
pub fn run_timers<S: Step + 'static>(mut flow: FlowSignal<S>, next: Option<Deferred>) {
    let Some(mut next) = next else {
        return;
    };
    spawn(async move {
        loop {
            tokio::time::sleep(next.delay).await;
            let ticket = next.ticket;
            let follow = flow.with_mut(|flow| flow.as_mut().and_then(|flow| flow.fire(ticket)));
            match follow {
                Some(deferred) => next = deferred,
                None => break,
            }
        }
    });
}

/// Applies a learner action and starts whatever timer it asks for.
pub fn dispatch<S: Step + 'static>(
    mut flow: FlowSignal<S>,
    op: impl FnOnce(&mut StepSequenceController<S>) -> Result<Deferred, SessionError>,
) {
    match flow.with_mut(|flow| flow.as_mut().map(op)) {
        Some(Ok(next)) => run_timers(flow, Some(next)),
        Some(Err(err)) => debug!(%err, "learner action rejected"),
        None => {}
    }
}

pub fn stage<S: Step + 'static>(mut flow: FlowSignal<S>, candidate: String) {
    let staged = flow.with_mut(|flow| flow.as_mut().map(|flow| flow.stage_answer(candidate)));
    if let Some(Err(err)) = staged {
        debug!(%err, "answer not staged");
    }
}

pub fn restart<S: Step + 'static>(mut flow: FlowSignal<S>) {
    let next = flow.with_mut(|flow| flow.as_mut().and_then(StepSequenceController::restart));
    run_timers(flow, next);
}

pub fn exit<S: Step + 'static>(mut flow: FlowSignal<S>) {
    flow.with_mut(|flow| {
        if let Some(flow) = flow.as_mut() {
            flow.exit();
        }
    });
}
