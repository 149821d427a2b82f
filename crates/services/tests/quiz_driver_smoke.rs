use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use learn_core::model::{LessonId, Phase, Tier, TimingSettings};
use learn_core::time::fixed_clock;
use services::{AppServices, Collaborators, Destination, Navigator, Notice, Notifier, SequenceDriver};
use tokio::time::Instant;

#[derive(Clone, Default)]
struct Recorder {
    notices: Rc<RefCell<Vec<Notice>>>,
    exits: Rc<RefCell<Vec<Destination>>>,
}

impl Notifier for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

impl Navigator for Recorder {
    fn leave(&self, destination: Destination) {
        self.exits.borrow_mut().push(destination);
    }
}

fn services() -> AppServices {
    AppServices::builtin(fixed_clock(), TimingSettings::default())
}

#[tokio::test(start_paused = true)]
async fn unanswered_quiz_times_out_every_question() {
    let recorder = Recorder::default();
    let quiz = services()
        .flows()
        .start_quiz(Collaborators::new(recorder.clone(), recorder.clone()))
        .unwrap();
    let mut driver = SequenceDriver::start(quiz);
    let started = Instant::now();

    let summary = driver.run_to_completion().await.cloned().unwrap();

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(160), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(161), "{elapsed:?}");
    assert_eq!(summary.score(), 0);
    assert_eq!(summary.tier(), Some(Tier::Base));
    assert_eq!(driver.snapshot().outcomes, vec![false; 5]);
    assert!(!driver.is_waiting());
    assert_eq!(
        *recorder.notices.borrow(),
        vec![Notice::Completed {
            message: "Good effort! 0% correct! ⭐".into()
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn answers_advance_after_the_reveal_window() {
    let quiz = services().flows().start_quiz(Collaborators::default()).unwrap();
    let mut driver = SequenceDriver::start(quiz);

    let snapshot = driver.next_event().await.unwrap();
    assert_eq!(snapshot.remaining_secs, Some(29));

    driver.submit(Some("5")).unwrap();
    let started = Instant::now();
    let snapshot = driver.next_event().await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2_500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2_600), "{elapsed:?}");
    assert_eq!(snapshot.current_index, 1);
    assert_eq!(snapshot.remaining_secs, Some(30));
    assert_eq!(snapshot.phase, Phase::Answering);
    assert_eq!(snapshot.score, 1);
}

#[tokio::test(start_paused = true)]
async fn restart_cancels_the_pending_advance() {
    let quiz = services().flows().start_quiz(Collaborators::default()).unwrap();
    let mut driver = SequenceDriver::start(quiz);

    driver.submit(Some("3")).unwrap();
    driver.restart();

    let snapshot = driver.next_event().await.unwrap();
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.outcomes.is_empty());
    assert_eq!(snapshot.remaining_secs, Some(29));
    assert_eq!(driver.controller().generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn lesson_completes_and_navigates_home() {
    let recorder = Recorder::default();
    let lesson = services()
        .flows()
        .start_lesson(
            LessonId::new(1),
            Collaborators::new(recorder.clone(), recorder.clone()),
        )
        .unwrap();
    let mut driver = SequenceDriver::start(lesson);
    assert!(!driver.is_waiting());

    for answer in [None, Some("3"), Some("4"), Some("2")] {
        driver.submit(answer).unwrap();
        driver.next_event().await.unwrap();
    }

    let summary = driver.summary().unwrap();
    assert_eq!(summary.percentage(), 100);
    assert_eq!(summary.tier(), None);
    assert!(recorder.notices.borrow().is_empty());
    assert_eq!(*recorder.exits.borrow(), vec![Destination::Home]);
}

#[tokio::test(start_paused = true)]
async fn exit_stops_timers_and_goes_home() {
    let recorder = Recorder::default();
    let quiz = services()
        .flows()
        .start_quiz(Collaborators::new(recorder.clone(), recorder.clone()))
        .unwrap();
    let driver = SequenceDriver::start(quiz);
    driver.exit();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(*recorder.exits.borrow(), vec![Destination::Home]);
}
