use learn_core::model::{Achievement, LearnerStats, LessonCard, SubjectFilter};
use services::CatalogService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChipVm {
    pub filter: SubjectFilter,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: u64,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub subject: &'static str,
    pub duration: String,
    pub difficulty: &'static str,
    pub completed: bool,
    pub playable: bool,
}

impl From<&LessonCard> for LessonCardVm {
    fn from(card: &LessonCard) -> Self {
        Self {
            id: card.id.value(),
            title: card.title.clone(),
            icon: card.icon.clone(),
            description: card.description.clone(),
            subject: card.subject.name(),
            duration: card.duration_label(),
            difficulty: card.difficulty.label(),
            completed: card.completed,
            playable: card.flow.is_some(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub value: u32,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub filters: Vec<FilterChipVm>,
    pub heading: String,
    pub activity_count: String,
    pub lessons: Vec<LessonCardVm>,
    pub achievements: Vec<Achievement>,
    pub stats: Vec<StatTileVm>,
}

#[must_use]
pub fn map_home(catalog: &CatalogService, selected: SubjectFilter) -> HomeVm {
    let filters = catalog
        .filters()
        .into_iter()
        .map(|filter| FilterChipVm {
            filter,
            label: format!("{} {}", filter.icon(), filter.name()),
            selected: filter == selected,
        })
        .collect();

    let listing = catalog.lessons(selected);
    let activity_count = match listing.count() {
        1 => "1 activity".to_string(),
        n => format!("{n} activities"),
    };

    HomeVm {
        filters,
        heading: selected.name().to_string(),
        activity_count,
        lessons: listing.lessons.iter().map(LessonCardVm::from).collect(),
        achievements: catalog.achievements(),
        stats: stat_tiles(catalog.stats()),
    }
}

fn stat_tiles(stats: LearnerStats) -> Vec<StatTileVm> {
    vec![
        StatTileVm {
            value: stats.points,
            label: "Points",
        },
        StatTileVm {
            value: stats.lessons_completed,
            label: "Lessons",
        },
        StatTileVm {
            value: stats.quizzes_taken,
            label: "Quizzes",
        },
        StatTileVm {
            value: stats.days_active,
            label: "Days Active",
        },
    ]
}
