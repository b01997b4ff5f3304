use async_trait::async_trait;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::shared::store::StoreFailure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AchievementQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Lists have no not-found case.
impl StoreFailure for AchievementQueryError {
    fn is_store_failure(&self) -> bool {
        true
    }
}

#[async_trait]
pub trait AchievementQuery: Send + Sync {
    /// Newest first by `date` (string order); ties keep insertion order.
    async fn list(&self) -> Result<Vec<Achievement>, AchievementQueryError>;
}
