use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Every experience in insertion order.
    async fn list_all(&self) -> Result<Vec<Experience>, ExperienceQueryError>;
}
