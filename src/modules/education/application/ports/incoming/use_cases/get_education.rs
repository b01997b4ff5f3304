use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::outgoing::EducationQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEducationError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<EducationQueryError> for GetEducationError {
    fn from(err: EducationQueryError) -> Self {
        GetEducationError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError>;
}
