mod home;
mod lesson;
mod quiz;
mod state;
mod timers;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use lesson::LessonView;
pub use quiz::QuizView;
pub use state::ViewError;
pub use toast::{Toast, ToastHost, ToastSlot, flow_collaborators};
