use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};
use std::sync::Arc;

use crate::modules::achievement::adapter::outgoing::sea_orm_entity::achievements::{
    self, Column, Entity,
};
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError,
};

#[derive(Clone)]
pub struct AchievementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `date` is free text; byte order keeps the live sort identical to the
/// fallback's `str` comparison regardless of the database locale.
const DATE_BYTE_ORDER: &str = r#""achievements"."date" COLLATE "C""#;

#[async_trait]
impl AchievementQuery for AchievementQueryPostgres {
    async fn list(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
        let rows = Entity::find()
            .order_by(Expr::cust(DATE_BYTE_ORDER), Order::Desc)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_achievement).collect()
    }
}

fn model_to_achievement(
    model: achievements::Model,
) -> Result<Achievement, AchievementQueryError> {
    Ok(Achievement {
        id: model.id.to_string(),
        title: model.title,
        description: model.description,
        date: model.date,
        category: model
            .category
            .parse()
            .map_err(AchievementQueryError::SerializationError)?,
        icon: model.icon,
    })
}

fn map_db_err(e: DbErr) -> AchievementQueryError {
    AchievementQueryError::DatabaseError(e.to_string())
}
