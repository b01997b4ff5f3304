use chrono::{TimeZone, Utc};

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};

pub fn sample_project(id: &str, featured: bool) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        description: "A sample project".to_string(),
        detailed_description: "A longer description of the sample project".to_string(),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        image: "https://images.example.com/sample.png".to_string(),
        github_url: "https://github.com/example/sample".to_string(),
        live_url: None,
        featured,
        category: ProjectCategory::Backend,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}
