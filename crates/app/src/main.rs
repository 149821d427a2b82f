use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learn_core::model::{SettingsError, SubjectFilter, TimingSettings};
use services::{AppServices, CatalogService, Clock, FlowService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod terminal;

#[derive(Parser, Debug)]
#[command(name = "kidslearn", version, about = "Lessons and quizzes for young learners")]
struct Cli {
    #[command(flatten)]
    timing: TimingArgs,

    /// Defaults to `ui` when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone, Copy)]
struct TimingArgs {
    /// Countdown per quiz question, in seconds.
    #[arg(long, env = "KIDSLEARN_QUIZ_SECONDS", default_value_t = 30, global = true)]
    quiz_seconds: u32,

    /// How long lesson feedback stays up before the next step.
    #[arg(long, env = "KIDSLEARN_LESSON_REVEAL_MS", default_value_t = 2_000, global = true)]
    lesson_reveal_ms: u32,

    /// How long quiz feedback stays up after an answer.
    #[arg(long, env = "KIDSLEARN_QUIZ_REVEAL_MS", default_value_t = 2_500, global = true)]
    quiz_reveal_ms: u32,

    /// How long the timed-out question stays up before moving on.
    #[arg(long, env = "KIDSLEARN_TIMEOUT_REVEAL_MS", default_value_t = 2_000, global = true)]
    timeout_reveal_ms: u32,
}

impl TimingArgs {
    fn settings(self) -> Result<TimingSettings, SettingsError> {
        TimingSettings::new(
            self.lesson_reveal_ms,
            self.quiz_reveal_ms,
            self.timeout_reveal_ms,
            self.quiz_seconds,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Open the desktop app.
    Ui,
    /// Take the quiz in this terminal.
    Quiz,
    /// Print the lesson catalog.
    Lessons {
        /// `all`, `math`, `science`, `reading` or `art`.
        #[arg(long, default_value = "all", value_parser = parse_subject)]
        subject: SubjectFilter,
    },
}

fn parse_subject(raw: &str) -> Result<SubjectFilter, String> {
    SubjectFilter::from_slug(&raw.trim().to_lowercase())
        .ok_or_else(|| format!("unknown subject: {raw}"))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn flows(&self) -> Arc<FlowService> {
        self.services.flows()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lessons(catalog: &CatalogService, filter: SubjectFilter) {
    let listing = catalog.lessons(filter);
    println!("{} {} ({} activities)", filter.icon(), filter.name(), listing.count());
    for card in &listing.lessons {
        let done = if card.completed { " ✓" } else { "" };
        let playable = if card.flow.is_some() { "" } else { " [coming soon]" };
        println!(
            "  {:>2}. {} {} ({} · {} · {}){done}{playable}",
            card.id.value(),
            card.icon,
            card.title,
            card.subject.name(),
            card.difficulty.label(),
            card.duration_label(),
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let timing = cli.timing.settings()?;
    let services = AppServices::builtin(Clock::default(), timing);
    info!(?timing, "services ready");

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("KidsLearn")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Quiz => terminal::run_quiz(&services).await,
        Command::Lessons { subject } => {
            print_lessons(&services.catalog(), subject);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use learn_core::model::Subject;

    use super::*;

    #[test]
    fn defaults_to_ui_with_default_timing() {
        let cli = Cli::try_parse_from(["kidslearn"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.timing.settings().unwrap(), TimingSettings::default());
    }

    #[test]
    fn lessons_accepts_subject_slug() {
        let cli = Cli::try_parse_from(["kidslearn", "lessons", "--subject", "Math"]).unwrap();
        let Some(Command::Lessons { subject }) = cli.command else {
            panic!("expected lessons command");
        };
        assert_eq!(subject, SubjectFilter::Only(Subject::Math));
    }

    #[test]
    fn rejects_unknown_subject() {
        assert!(Cli::try_parse_from(["kidslearn", "lessons", "--subject", "music"]).is_err());
    }

    #[test]
    fn out_of_range_countdown_is_a_settings_error() {
        let cli = Cli::try_parse_from(["kidslearn", "quiz", "--quiz-seconds", "0"]).unwrap();
        assert_eq!(
            cli.timing.settings(),
            Err(SettingsError::InvalidQuizSeconds)
        );
    }
}
