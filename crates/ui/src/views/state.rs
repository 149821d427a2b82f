#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LessonUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::LessonUnavailable => "This lesson is coming soon! Try a math lesson for now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&services::FlowError> for ViewError {
    fn from(err: &services::FlowError) -> Self {
        match err {
            services::FlowError::Catalog(_) => ViewError::LessonUnavailable,
            _ => ViewError::Unknown,
        }
    }
}
