use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// Every skill in insertion order.
    async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError>;
}
