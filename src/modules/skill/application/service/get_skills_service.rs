use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{group_by_category, SkillsByCategory};
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::shared::store::AvailabilityGate;

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
    gate: AvailabilityGate,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q, gate: AvailabilityGate) -> Self {
        Self { query, gate }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsError> {
        self.gate
            .read_or_empty("skills", async {
                self.query.list_all().await.map(group_by_category)
            })
            .await
            .map_err(GetSkillsError::from)
    }
}
