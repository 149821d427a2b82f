use dioxus::prelude::*;
use dioxus_router::use_navigator;
use learn_core::model::QuizQuestion;
use services::QuizController;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::lesson::feedback_class;
use crate::views::timers::{FlowSignal, dispatch, exit, restart, run_timers, stage};
use crate::views::toast::{ToastSlot, flow_collaborators};
use crate::vm::{OptionVm, QuestionVm, QuizScreen, ResultsVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let toast = use_context::<ToastSlot>();
    let navigator = use_navigator();

    let (flow, load_error) = use_hook(move || {
        match ctx.flows().start_quiz(flow_collaborators(toast, navigator)) {
            Ok(controller) => {
                let first = controller.begin();
                let flow = Signal::new(Some(controller));
                run_timers(flow, first);
                (flow, None)
            }
            Err(err) => {
                warn!(%err, "quiz could not be started");
                (Signal::new(None), Some(ViewError::from(&err)))
            }
        }
    });
    let flow: FlowSignal<QuizQuestion> = flow;

    let Some(screen) = flow.with(|flow| flow.as_ref().map(QuizScreen::from_controller)) else {
        let message = load_error.unwrap_or(ViewError::Unknown).message();
        return rsx! {
            div { class: "page quiz",
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

    rsx! {
        div { class: "page quiz",
            div { class: "flow-header",
                button {
                    id: "quiz-exit",
                    class: "btn btn-ghost",
                    onclick: move |_| exit(flow),
                    "← Exit"
                }
                if let QuizScreen::Question(question) = &screen {
                    span { class: "badge badge-score", "⭐ {question.score}" }
                }
            }

            match screen {
                QuizScreen::Question(question) => rsx! {
                    QuestionPanel { question, flow }
                },
                QuizScreen::Results(results) => rsx! {
                    ResultsPanel { results, flow }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, flow: FlowSignal<QuizQuestion>) -> Element {
    let locked = question.revealing;

    rsx! {
        section { class: "question-panel",
            div { class: "question-meta",
                div { class: "badges",
                    span { class: "badge", "{question.counter}" }
                    span { class: "badge", "{question.category}" }
                    span { class: difficulty_class(question.easy), "{question.difficulty}" }
                }
                span {
                    id: "quiz-countdown",
                    class: countdown_class(question.low_time),
                    "⏱ {question.countdown}"
                }
            }

            h2 { class: "question-prompt", "{question.prompt}" }

            div { class: "options", role: "radiogroup",
                for option in question.options.iter().cloned() {
                    OptionRow {
                        key: "{option.label}",
                        option: option.clone(),
                        disabled: locked,
                        onpick: move |value: String| stage(flow, value),
                    }
                }
            }

            if let Some(feedback) = question.feedback.clone() {
                div { class: feedback_class(feedback.correct),
                    strong { "{feedback.text}" }
                    if let Some(detail) = feedback.detail {
                        p { "{detail}" }
                    }
                }
            }

            if !locked {
                button {
                    id: "quiz-submit",
                    class: "btn btn-primary btn-wide",
                    disabled: !question.can_submit,
                    onclick: move |_| dispatch(flow, QuizController::submit_staged),
                    "Submit Answer ✨"
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: OptionVm, disabled: bool, onpick: EventHandler<String>) -> Element {
    let value = option.label.clone();

    rsx! {
        label { class: option_class(option.selected),
            input {
                r#type: "radio",
                name: "quiz-option",
                checked: option.selected,
                disabled: disabled,
                onchange: move |_| onpick.call(value.clone()),
            }
            span { "{option.label}" }
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, flow: FlowSignal<QuizQuestion>) -> Element {
    rsx! {
        section { class: "results-panel",
            div { class: "trophy", "🏆" }
            h2 { "Quiz Completed! 🎉" }
            div { class: "stars",
                for (slot, filled) in results.stars.iter().copied().enumerate() {
                    span { key: "{slot}",
                        if filled { "⭐" } else { "☆" }
                    }
                }
            }
            p { class: "score-line", "{results.score_line}" }
            p { class: "headline", "{results.headline}" }

            div { class: "result-actions",
                button {
                    id: "quiz-restart",
                    class: "btn btn-outline",
                    onclick: move |_| restart(flow),
                    "Try Again"
                }
                button {
                    id: "quiz-home",
                    class: "btn btn-primary",
                    onclick: move |_| exit(flow),
                    "Back to Home"
                }
            }

            div { class: "result-rows",
                h3 { "Your Results:" }
                for row in results.rows.iter() {
                    div { key: "{row.label}", class: "result-row",
                        span { "{row.label}" }
                        span { class: row_class(row.correct),
                            if row.correct { "✓" } else { "✗" }
                        }
                    }
                }
            }
        }
    }
}

fn difficulty_class(easy: bool) -> &'static str {
    if easy {
        "badge badge-easy"
    } else {
        "badge badge-medium"
    }
}

fn countdown_class(low_time: bool) -> &'static str {
    if low_time {
        "countdown countdown-low"
    } else {
        "countdown"
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "option option-selected"
    } else {
        "option"
    }
}

fn row_class(correct: bool) -> &'static str {
    if correct { "result-correct" } else { "result-wrong" }
}
