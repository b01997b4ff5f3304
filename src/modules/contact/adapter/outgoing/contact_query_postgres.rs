use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    Column, Entity,
};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, ContactQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}
