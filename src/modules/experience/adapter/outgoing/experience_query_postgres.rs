use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, Column, Entity,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_experience).collect()
    }
}

fn model_to_experience(model: experiences::Model) -> Result<Experience, ExperienceQueryError> {
    let technologies: Vec<String> = serde_json::from_value(model.technologies)
        .map_err(|e| ExperienceQueryError::SerializationError(e.to_string()))?;

    Ok(Experience {
        id: model.id.to_string(),
        company: model.company,
        position: model.position,
        duration: model.duration,
        description: model.description,
        technologies,
        kind: model
            .kind
            .parse()
            .map_err(ExperienceQueryError::SerializationError)?,
    })
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
