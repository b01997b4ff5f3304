use std::sync::LazyLock;

use crate::modules::achievement::application::domain::entities::{
    Achievement, AchievementCategory,
};

static FALLBACK_ACHIEVEMENTS: LazyLock<Vec<Achievement>> = LazyLock::new(build);

/// Same records the seed utility writes, with synthetic `a1`..`a4` ids.
pub fn fallback_achievements() -> &'static [Achievement] {
    FALLBACK_ACHIEVEMENTS.as_slice()
}

fn achievement(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    category: AchievementCategory,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        category,
        icon: None,
    }
}

fn build() -> Vec<Achievement> {
    vec![
        achievement(
            "a1",
            "Web Rider Competition Participant",
            "Participated in web development competition at PCCOE, showcasing frontend development skills",
            "2024",
            AchievementCategory::Competition,
        ),
        achievement(
            "a2",
            "Event Organizer - Coding Competition",
            "Organized and managed coding competitions during diploma studies, coordinating technical events",
            "2022",
            AchievementCategory::Organizing,
        ),
        achievement(
            "a3",
            "Event Organizer - Poster Making Competition",
            "Successfully organized poster making competitions, managing logistics and participant coordination",
            "2022",
            AchievementCategory::Organizing,
        ),
        achievement(
            "a4",
            "High Academic Performance",
            "Maintained consistent high grades throughout academic career with 8.5 GPA in engineering",
            "2021-2025",
            AchievementCategory::Academic,
        ),
    ]
}
