#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod collaborators;
pub mod error;
pub mod flow_service;
pub mod sessions;

pub use learn_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, LessonListing};
pub use collaborators::{
    Collaborators, Destination, Discard, Navigator, Notice, NoticeLevel, Notifier,
};
pub use error::{FlowError, SessionError};
pub use flow_service::FlowService;
pub use sessions::{
    Deferred, LessonController, QuizController, SequenceDriver, SequenceMode, SessionProgress,
    StepSequenceController, Ticket, TimerKind,
};
