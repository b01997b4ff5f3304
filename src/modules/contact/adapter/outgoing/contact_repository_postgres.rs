use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel,
};
use crate::modules::contact::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let (name, email, message) = message.into_parts();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            message: Set(message),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model
            .insert(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(saved.into())
    }
}

impl From<contact_messages::Model> for ContactMessage {
    fn from(model: contact_messages::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
            email: model.email,
            message: model.message,
            created_at: model.created_at.into(),
        }
    }
}
