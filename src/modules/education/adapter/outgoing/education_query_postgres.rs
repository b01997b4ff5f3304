use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::education::adapter::outgoing::sea_orm_entity::education::{
    self, Column, Entity,
};
use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::outgoing::{
    EducationQuery, EducationQueryError,
};

#[derive(Clone)]
pub struct EducationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationQuery for EducationQueryPostgres {
    async fn list_ordered(&self) -> Result<Vec<Education>, EducationQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| EducationQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Education::from).collect())
    }
}

impl From<education::Model> for Education {
    fn from(model: education::Model) -> Self {
        Self {
            id: model.id.to_string(),
            degree: model.degree,
            institution: model.institution,
            year: model.year,
            grade: model.grade,
            description: model.description,
            order: model.display_order,
        }
    }
}
