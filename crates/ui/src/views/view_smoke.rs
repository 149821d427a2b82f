use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router, use_navigator};
use learn_core::ContentCatalog;
use learn_core::model::{QuizQuestion, TimingSettings};
use learn_core::time::fixed_clock;
use services::StepSequenceController;

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_timing,
};
use super::timers::{FlowSignal, dispatch, exit, restart, run_timers};
use super::toast::{ToastSlot, flow_collaborators};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("KidsLearn!"), "missing title in {html}");
    assert!(html.contains("6 activities"), "missing count in {html}");
    assert!(html.contains("Counting to 20"), "missing lesson in {html}");
    assert!(html.contains("All Subjects"), "missing filter in {html}");
    assert!(html.contains("Quiz Master"), "missing achievement in {html}");
    assert!(html.contains("125"), "missing points in {html}");
    assert!(html.contains("Coming Soon"), "missing locked card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_first_step() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Numbers 1-5"), "missing title in {html}");
    assert!(html.contains("Step 1 of 4"), "missing counter in {html}");
    assert!(html.contains("Score: 0/4"), "missing score in {html}");
    assert!(html.contains("Start Learning!"), "missing start in {html}");
    assert!(html.contains("Play Audio"), "missing audio in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_unavailable_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson(2));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("coming soon"), "missing error in {html}");
    assert!(html.contains("Back to Home"), "missing home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("How many fingers"), "missing prompt in {html}");
    assert!(html.contains("30s"), "missing countdown in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_counts_down_while_unanswered() {
    let timing = TimingSettings::new(2_000, 2_500, 2_000, 12).unwrap();
    let mut harness = setup_view_harness_with_timing(ViewKind::Quiz, timing);
    harness.rebuild();
    assert!(harness.render().contains("12s"));

    harness.drive_for(Duration::from_millis(3_500)).await;
    let html = harness.render();
    assert!(html.contains("9s"), "countdown did not advance in {html}");
    assert!(html.contains("countdown-low"), "missing low-time style in {html}");
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum ChainRoute {
    #[route("/")]
    RestartDuringReveal {},
}

#[component]
fn ChainRoot() -> Element {
    use_context_provider(|| ToastSlot::new(Signal::new(None)));
    rsx! { Router::<ChainRoute> {} }
}

/// Submits at once, restarts one second into the reveal, exits at 3.5 s.
#[component]
fn RestartDuringReveal() -> Element {
    let toast = use_context::<ToastSlot>();
    let navigator = use_navigator();

    let flow: FlowSignal<QuizQuestion> = use_hook(move || {
        let controller = StepSequenceController::quiz(
            ContentCatalog::builtin().quiz_questions().to_vec(),
            TimingSettings::default(),
            fixed_clock(),
            flow_collaborators(toast, navigator),
        )
        .ok();
        let first = controller.as_ref().and_then(StepSequenceController::begin);
        let flow = Signal::new(controller);
        run_timers(flow, first);
        spawn(async move {
            dispatch(flow, |quiz| quiz.submit_answer(Some("5")));
            tokio::time::sleep(Duration::from_secs(1)).await;
            restart(flow);
            tokio::time::sleep(Duration::from_millis(2_500)).await;
            exit(flow);
        });
        flow
    });

    let Some((snapshot, generation)) = flow.with(|flow| {
        flow.as_ref()
            .map(|quiz| (quiz.snapshot(), quiz.generation()))
    }) else {
        return rsx! { p { "no quiz" } };
    };
    let state = format!(
        "index={} generation={generation} score={} revealing={} remaining={}",
        snapshot.current_index,
        snapshot.score,
        snapshot.result_visible,
        snapshot.remaining_secs.unwrap_or_default(),
    );
    let toast = toast.current().map(|toast| toast.message).unwrap_or_default();

    rsx! {
        p { id: "chain", "{state}" }
        p { id: "toast", "{toast}" }
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn restart_during_reveal_drops_the_pending_advance() {
    let mut harness = ViewHarness {
        dom: VirtualDom::new(ChainRoot),
    };
    harness.rebuild();

    harness.drive_for(Duration::from_millis(500)).await;
    let html = harness.render();
    assert!(html.contains("score=1 revealing=true"), "answer not revealed in {html}");
    assert!(html.contains("Correct"), "missing toast in {html}");

    harness.drive_for(Duration::from_secs(1)).await;
    let html = harness.render();
    assert!(
        html.contains("index=0 generation=1 score=0 revealing=false remaining=30"),
        "restart not applied in {html}"
    );

    // The reveal would have advanced at 2.5 s; two fresh ticks land by 3.1 s.
    harness.drive_for(Duration::from_millis(1_600)).await;
    let html = harness.render();
    assert!(
        html.contains("index=0 generation=1 score=0 revealing=false remaining=28"),
        "stale advance leaked through in {html}"
    );

    // Exit routes home and retires the countdown.
    harness.drive_for(Duration::from_secs(3)).await;
    let html = harness.render();
    assert!(
        html.contains("index=0 generation=2 score=0 revealing=false remaining=28"),
        "countdown kept running after exit in {html}"
    );
}
