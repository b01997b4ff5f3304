use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::store::AvailabilityGate;

pub struct GetSingleProjectService<Q, F>
where
    Q: ProjectQuery,
    F: ProjectQuery,
{
    live: Q,
    fallback: F,
    gate: AvailabilityGate,
}

impl<Q, F> GetSingleProjectService<Q, F>
where
    Q: ProjectQuery,
    F: ProjectQuery,
{
    pub fn new(live: Q, fallback: F, gate: AvailabilityGate) -> Self {
        Self {
            live,
            fallback,
            gate,
        }
    }
}

#[async_trait]
impl<Q, F> GetSingleProjectUseCase for GetSingleProjectService<Q, F>
where
    Q: ProjectQuery + Send + Sync,
    F: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Project, GetSingleProjectError> {
        self.gate
            .read(
                "project",
                self.live.get_by_id(id),
                self.fallback.get_by_id(id),
            )
            .await
            .map_err(GetSingleProjectError::from)
    }
}
