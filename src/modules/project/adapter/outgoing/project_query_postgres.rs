// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        let mut query = Entity::find();

        if filter.featured_only {
            query = query.filter(Column::Featured.eq(true));
        }

        let projects = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_project).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Project, ProjectQueryError> {
        // Anything that is not a UUID cannot exist in this table.
        let project_id = Uuid::parse_str(id).map_err(|_| ProjectQueryError::NotFound)?;

        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_project(project)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    Ok(Project {
        id: model.id.to_string(),
        title: model.title,
        description: model.description,
        detailed_description: model.detailed_description,
        technologies: from_json(&model.technologies)?,
        image: model.image,
        github_url: model.github_url,
        live_url: model.live_url,
        featured: model.featured,
        category: model
            .category
            .parse()
            .map_err(ProjectQueryError::SerializationError)?,
        created_at: model.created_at.into(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
