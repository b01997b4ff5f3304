// src/modules/project/adapter/outgoing/project_query_fallback.rs

use async_trait::async_trait;

use super::fallback_data::fallback_projects;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};

/// In-process stand-in for the projects table, with the same ordering and
/// filtering contract as [`super::ProjectQueryPostgres`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectQueryFallback {
    projects: &'static [Project],
}

impl ProjectQueryFallback {
    pub fn new() -> Self {
        Self::from_static(fallback_projects())
    }

    pub fn from_static(projects: &'static [Project]) -> Self {
        Self { projects }
    }
}

impl Default for ProjectQueryFallback {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryFallback {
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| !filter.featured_only || p.featured)
            .cloned()
            .collect();

        // stable: equal timestamps keep dataset order
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(projects)
    }

    async fn get_by_id(&self, id: &str) -> Result<Project, ProjectQueryError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }
}
