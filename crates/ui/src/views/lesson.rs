use dioxus::prelude::*;
use dioxus_router::use_navigator;
use learn_core::model::{LessonId, LessonStep};
use services::LessonController;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::timers::{FlowSignal, dispatch, exit, run_timers, stage};
use crate::views::toast::{ToastSlot, flow_collaborators};
use crate::vm::{LessonVm, StepInputVm};

#[component]
pub fn LessonView(lesson_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let toast = use_context::<ToastSlot>();
    let navigator = use_navigator();

    let (flow, load_error) = use_hook(move || {
        let started = ctx
            .flows()
            .start_lesson(LessonId::new(lesson_id), flow_collaborators(toast, navigator));
        match started {
            Ok(controller) => {
                let first = controller.begin();
                let flow = Signal::new(Some(controller));
                run_timers(flow, first);
                (flow, None)
            }
            Err(err) => {
                warn!(%err, lesson_id, "lesson could not be started");
                (Signal::new(None), Some(ViewError::from(&err)))
            }
        }
    });
    let flow: FlowSignal<LessonStep> = flow;

    let Some(vm) = flow.with(|flow| flow.as_ref().map(LessonVm::from_controller)) else {
        let message = load_error.unwrap_or(ViewError::Unknown).message();
        return rsx! {
            div { class: "page lesson",
                p { class: "view-error", "{message}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Back to Home"
                }
            }
        };
    };
    let locked = vm.locked;

    rsx! {
        div { class: "page lesson",
            div { class: "flow-header",
                button {
                    id: "lesson-back",
                    class: "btn btn-ghost",
                    onclick: move |_| exit(flow),
                    "← Back"
                }
                div { class: "badges",
                    span { class: "badge badge-score", "{vm.score_label}" }
                    span { class: "badge", "{vm.step_label}" }
                }
            }

            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.progress_percent}%;" }
            }

            article { class: "step-card",
                h2 { "{vm.title}" }
                div { class: "step-visual", "{vm.visual}" }
                p { class: "step-content", "{vm.content}" }

                match vm.input.clone() {
                    StepInputVm::Start => rsx! {
                        button {
                            id: "lesson-start",
                            class: "btn btn-primary",
                            disabled: locked,
                            onclick: move |_| dispatch(flow, |lesson| lesson.submit_answer(None)),
                            "▶ Start Learning!"
                        }
                    },
                    StepInputVm::Freeform { value } => rsx! {
                        div { class: "freeform",
                            input {
                                r#type: "number",
                                class: "answer-input",
                                placeholder: "?",
                                value: "{value}",
                                disabled: locked,
                                oninput: move |evt: FormEvent| stage(flow, evt.value()),
                            }
                            button {
                                id: "lesson-check",
                                class: "btn btn-primary",
                                disabled: locked || value.is_empty(),
                                onclick: move |_| dispatch(flow, LessonController::submit_staged),
                                "Check Answer"
                            }
                        }
                    },
                    StepInputVm::Choices { options, grid } => rsx! {
                        div { class: choice_grid_class(grid),
                            for option in options {
                                ChoiceButton {
                                    key: "{option}",
                                    value: option.clone(),
                                    wide: grid,
                                    disabled: locked,
                                    onpick: move |value: String| {
                                        dispatch(flow, |lesson| lesson.submit_answer(Some(value.as_str())));
                                    },
                                }
                            }
                        }
                    },
                }

                if let Some(feedback) = vm.feedback.clone() {
                    div {
                        class: feedback_class(feedback.correct),
                        "{feedback.text}"
                    }
                }
            }

            if vm.has_audio {
                button {
                    class: "btn btn-dashed",
                    onclick: move |_| debug!(lesson_id, "audio requested"),
                    "🔊 Play Audio"
                }
            }

            p { class: "encouragement", "You're doing great! Keep going! ⭐" }
        }
    }
}

#[component]
fn ChoiceButton(value: String, wide: bool, disabled: bool, onpick: EventHandler<String>) -> Element {
    let picked = value.clone();
    rsx! {
        button {
            class: choice_class(wide),
            disabled: disabled,
            onclick: move |_| onpick.call(picked.clone()),
            "{value}"
        }
    }
}

fn choice_grid_class(wide: bool) -> &'static str {
    if wide {
        "choice-grid wide"
    } else {
        "choice-grid"
    }
}

fn choice_class(wide: bool) -> &'static str {
    if wide {
        "choice choice-wide"
    } else {
        "choice"
    }
}

pub(crate) fn feedback_class(correct: bool) -> &'static str {
    if correct {
        "feedback feedback-correct"
    } else {
        "feedback feedback-wrong"
    }
}
