use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::shared::store::AvailabilityGate;

pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
    gate: AvailabilityGate,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q, gate: AvailabilityGate) -> Self {
        Self { query, gate }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        self.gate
            .read_or_empty("experience", self.query.list_all())
            .await
            .map_err(GetExperiencesError::from)
    }
}
