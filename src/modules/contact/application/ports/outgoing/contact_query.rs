use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// All messages, newest first.
    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, ContactQueryError>;
}
