use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetExperiencesError {
    fn from(err: ExperienceQueryError) -> Self {
        GetExperiencesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError>;
}
