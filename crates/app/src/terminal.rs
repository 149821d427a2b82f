//! Plain-terminal quiz: options are picked by number, the countdown keeps running.

use learn_core::model::{Phase, SessionSnapshot, Step};
use services::{
    AppServices, Collaborators, Discard, Notice, NoticeLevel, Notifier, QuizController,
    SequenceDriver, SessionError,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use ui::vm::QuizScreen;

/// Seconds left at which a reminder is printed.
const REMINDERS: [u32; 2] = [10, 5];

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let mark = match notice.level() {
            NoticeLevel::Success => "✔",
            NoticeLevel::Error => "✘",
        };
        println!("{mark} {}", notice.message());
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Pick(String),
    Submit,
    Quit,
    Unknown,
}

fn parse_input(line: &str, options: &[String]) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Submit;
    }
    if line.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| options.get(index))
        .map_or(Input::Unknown, |option| Input::Pick(option.clone()))
}

fn print_question(controller: &QuizController, snapshot: &SessionSnapshot) {
    let Some(question) = controller.current_step() else {
        return;
    };
    println!();
    println!(
        "Question {} of {} · {} · {} ({}s)",
        snapshot.step_number(),
        snapshot.total,
        question.category(),
        question.difficulty().label(),
        snapshot.remaining_secs.unwrap_or_default(),
    );
    println!("{}", question.question());
    for (index, option) in question.options().iter().enumerate() {
        println!("  {}) {option}", index + 1);
    }
    println!("Type a number and press Enter (q to quit).");
}

fn print_explanation(controller: &QuizController) {
    if let Some(question) = controller.current_step() {
        println!("  {}", question.explanation());
    }
}

fn print_results(controller: &QuizController) {
    let QuizScreen::Results(results) = QuizScreen::from_controller(controller) else {
        return;
    };
    let stars: String = results
        .stars
        .iter()
        .map(|filled| if *filled { '⭐' } else { '☆' })
        .collect();
    println!();
    println!("Quiz Completed! 🎉");
    println!("{stars}");
    println!("{}", results.score_line);
    println!("{}", results.headline);
    for row in &results.rows {
        println!("  {} {}", row.label, if row.correct { "✓" } else { "✗" });
    }
}

/// Runs the quiz against stdin until it completes or the learner quits.
///
/// # Errors
///
/// Returns an error if the quiz cannot be started or stdin fails.
pub async fn run_quiz(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let quiz = services
        .flows()
        .start_quiz(Collaborators::new(TerminalNotifier, Discard))?;
    let mut driver = SequenceDriver::start(quiz);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = None;

    loop {
        let snapshot = driver.snapshot();
        if snapshot.terminal {
            break;
        }
        if snapshot.phase == Phase::Answering && shown != Some(snapshot.current_index) {
            print_question(driver.controller(), &snapshot);
            shown = Some(snapshot.current_index);
        }

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    driver.exit();
                    return Ok(());
                };
                let options = driver
                    .controller()
                    .current_step()
                    .map(|question| question.options().to_vec())
                    .unwrap_or_default();
                let submitted = match parse_input(&line, &options) {
                    Input::Quit => {
                        driver.exit();
                        println!("Bye! 👋");
                        return Ok(());
                    }
                    Input::Unknown => {
                        println!("Pick a number between 1 and {}.", options.len());
                        continue;
                    }
                    Input::Pick(option) => driver.stage(option).and_then(|()| driver.submit_staged()),
                    Input::Submit => driver.submit_staged(),
                };
                match submitted {
                    Ok(()) => print_explanation(driver.controller()),
                    Err(SessionError::AlreadyAnswered) => println!("Hang on, the next question is coming…"),
                    Err(err) => debug!(%err, "answer not accepted"),
                }
            }
            event = driver.next_event() => {
                let Some(snapshot) = event else {
                    break;
                };
                match (snapshot.phase, snapshot.remaining_secs) {
                    (Phase::Revealing, _) => {
                        println!("⏰ Time's up!");
                        print_explanation(driver.controller());
                    }
                    (Phase::Answering, Some(left)) if REMINDERS.contains(&left) => {
                        println!("⏱ {left}s left");
                    }
                    _ => {}
                }
            }
        }
    }

    print_results(driver.controller());
    Ok(())
}
