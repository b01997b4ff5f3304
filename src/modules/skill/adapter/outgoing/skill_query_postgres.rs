use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_skill).collect()
    }
}

fn model_to_skill(model: skills::Model) -> Result<Skill, SkillQueryError> {
    Ok(Skill {
        id: model.id.to_string(),
        category: model
            .category
            .parse()
            .map_err(SkillQueryError::SerializationError)?,
        name: model.name,
        level: model
            .level
            .parse()
            .map_err(SkillQueryError::SerializationError)?,
        icon: model.icon,
    })
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
