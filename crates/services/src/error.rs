//! Shared error types for the services crate.

use thiserror::Error;

use learn_core::CatalogError;
use learn_core::model::{Phase, StepError};

/// Errors emitted by the step sequence controller.
///
/// Every variant except `Empty`/`Malformed` is a rejected call: the session is left
/// exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a sequence needs at least one step")]
    Empty,
    #[error("step {index} is malformed: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: StepError,
    },
    #[error("an answer is required before submitting")]
    MissingAnswer,
    #[error("the current step was already answered")]
    AlreadyAnswered,
    #[error("nothing to advance: session is {phase:?}")]
    NotRevealing { phase: Phase },
    #[error("session already completed")]
    Completed,
    #[error("this sequence has no countdown")]
    Untimed,
}

/// Errors emitted when starting a lesson or quiz flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
