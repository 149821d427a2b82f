use dioxus::prelude::*;
use dioxus_router::use_navigator;
use learn_core::model::SubjectFilter;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LessonCardVm, map_home};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut selected = use_signal(SubjectFilter::default);

    let vm = map_home(&ctx.catalog(), selected());
    let first_lesson = ctx.first_playable_lesson();

    rsx! {
        div { class: "page home",
            header { class: "home-header",
                h1 { "🎓 KidsLearn!" }
            }

            section { class: "welcome",
                h2 { "Welcome to Your Learning Adventure! 🌟" }
                p { "Choose a subject and start exploring amazing new things!" }
            }

            div { class: "quick-actions",
                button {
                    id: "start-quiz",
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Quiz {});
                    },
                    "Take a Quiz! 🧠"
                }
                if let Some(lesson_id) = first_lesson {
                    button {
                        id: "start-learning",
                        class: "btn btn-outline",
                        onclick: move |_| {
                            navigator.push(Route::Lesson { lesson_id });
                        },
                        "Start Learning 📚"
                    }
                }
            }

            nav { class: "subject-filters",
                for chip in vm.filters.iter().cloned() {
                    button {
                        key: "{chip.filter.slug()}",
                        class: chip_class(chip.selected),
                        onclick: move |_| selected.set(chip.filter),
                        "{chip.label}"
                    }
                }
            }

            section { class: "lessons",
                div { class: "lessons-header",
                    h3 { "{vm.heading}" }
                    span { class: "badge", "{vm.activity_count}" }
                }
                div { class: "lesson-grid",
                    for card in vm.lessons.iter().cloned() {
                        LessonCardTile { key: "{card.id}", card: card.clone() }
                    }
                }
            }

            section { class: "achievements",
                h3 { "Your Achievements" }
                div { class: "achievement-grid",
                    for achievement in vm.achievements.iter() {
                        div {
                            key: "{achievement.name}",
                            class: achievement_class(achievement.earned),
                            span { class: "achievement-icon", "{achievement.icon}" }
                            span { "{achievement.name}" }
                        }
                    }
                }
            }

            section { class: "progress",
                h3 { "Your Progress" }
                div { class: "stat-grid",
                    for stat in vm.stats.iter() {
                        div { key: "{stat.label}", class: "stat",
                            strong { "{stat.value}" }
                            span { "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCardTile(card: LessonCardVm) -> Element {
    let navigator = use_navigator();
    let lesson_id = card.id;

    rsx! {
        article { class: "lesson-card",
            div { class: "lesson-icon", "{card.icon}" }
            if card.completed {
                span { class: "badge badge-done", "✓ Done" }
            }
            h4 { "{card.title}" }
            p { class: "lesson-description", "{card.description}" }
            div { class: "lesson-meta",
                span { "⏱ {card.duration}" }
                span { class: "badge", "{card.difficulty}" }
            }
            button {
                class: "btn btn-primary",
                disabled: !card.playable,
                onclick: move |_| {
                    navigator.push(Route::Lesson { lesson_id });
                },
                if card.playable { "Start Adventure" } else { "Coming Soon" }
            }
        }
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "chip chip-selected"
    } else {
        "chip"
    }
}

fn achievement_class(earned: bool) -> &'static str {
    if earned {
        "achievement earned"
    } else {
        "achievement"
    }
}
