use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::{
    GetEducationError, GetEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::EducationQuery;
use crate::shared::store::AvailabilityGate;

pub struct GetEducationService<Q>
where
    Q: EducationQuery,
{
    query: Q,
    gate: AvailabilityGate,
}

impl<Q> GetEducationService<Q>
where
    Q: EducationQuery,
{
    pub fn new(query: Q, gate: AvailabilityGate) -> Self {
        Self { query, gate }
    }
}

#[async_trait]
impl<Q> GetEducationUseCase for GetEducationService<Q>
where
    Q: EducationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        self.gate
            .read_or_empty("education", self.query.list_ordered())
            .await
            .map_err(GetEducationError::from)
    }
}
