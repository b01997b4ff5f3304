use async_trait::async_trait;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::incoming::use_cases::{
    GetAchievementsError, GetAchievementsUseCase,
};
use crate::modules::achievement::application::ports::outgoing::AchievementQuery;
use crate::shared::store::AvailabilityGate;

pub struct GetAchievementsService<Q, F>
where
    Q: AchievementQuery,
    F: AchievementQuery,
{
    live: Q,
    fallback: F,
    gate: AvailabilityGate,
}

impl<Q, F> GetAchievementsService<Q, F>
where
    Q: AchievementQuery,
    F: AchievementQuery,
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
impl<Q, F> GetAchievementsUseCase for GetAchievementsService<Q, F>
where
    Q: AchievementQuery + Send + Sync,
    F: AchievementQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError> {
        self.gate
            .read("achievements", self.live.list(), self.fallback.list())
            .await
            .map_err(GetAchievementsError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::modules::achievement::adapter::outgoing::AchievementQueryFallback;
    use crate::modules::achievement::application::domain::entities::AchievementCategory;
    use crate::modules::achievement::application::ports::outgoing::AchievementQueryError;
    use crate::shared::store::ConnectionState;
    use crate::tests::support::store::FixedStoreStatus;

    struct MockAchievementQuery {
        result: Result<Vec<Achievement>, AchievementQueryError>,
    }

    #[async_trait]
    impl AchievementQuery for MockAchievementQuery {
        async fn list(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
            self.result.clone()
        }
    }

    fn live_one() -> Vec<Achievement> {
        vec![Achievement {
            id: "6650aa".to_string(),
            title: "Certified".to_string(),
            description: "Passed".to_string(),
            date: "2025".to_string(),
            category: AchievementCategory::Certification,
            icon: None,
        }]
    }

    fn service(
        result: Result<Vec<Achievement>, AchievementQueryError>,
        state: ConnectionState,
    ) -> GetAchievementsService<MockAchievementQuery, AchievementQueryFallback> {
        GetAchievementsService::new(
            MockAchievementQuery { result },
            AchievementQueryFallback::new(),
            AvailabilityGate::new(Arc::new(FixedStoreStatus::new(state))),
        )
    }

    #[tokio::test]
    async fn connected_serves_live() {
        let list = service(Ok(live_one()), ConnectionState::Connected)
            .execute()
            .await
            .unwrap();

        assert_eq!(list, live_one());
    }

    #[tokio::test]
    async fn disconnected_serves_fallback() {
        let list = service(Ok(live_one()), ConnectionState::Disconnected)
            .execute()
            .await
            .unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(list[0].title, "Web Rider Competition Participant");
    }

    #[tokio::test]
    async fn live_failure_serves_fallback() {
        let list = service(
            Err(AchievementQueryError::DatabaseError("reset".to_string())),
            ConnectionState::Connected,
        )
        .execute()
        .await
        .unwrap();

        assert_eq!(list.len(), 4);
    }
}
