use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EducationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationQuery: Send + Sync {
    /// All entries, ascending by display order.
    async fn list_ordered(&self) -> Result<Vec<Education>, EducationQueryError>;
}
