use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactMessage, NewContactMessage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: NewContactMessage)
        -> Result<ContactMessage, ContactRepositoryError>;
}
