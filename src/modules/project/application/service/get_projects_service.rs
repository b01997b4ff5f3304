use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectQuery};
use crate::shared::store::AvailabilityGate;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q, F>
where
    Q: ProjectQuery,
    F: ProjectQuery,
{
    live: Q,
    fallback: F,
    gate: AvailabilityGate,
}

impl<Q, F> GetProjectsService<Q, F>
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
impl<Q, F> GetProjectsUseCase for GetProjectsService<Q, F>
where
    Q: ProjectQuery + Send + Sync,
    F: ProjectQuery + Send + Sync,
{
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        self.gate
            .read(
                "projects",
                self.live.list(filter),
                self.fallback.list(filter),
            )
            .await
            .map_err(GetProjectsError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::modules::project::adapter::outgoing::ProjectQueryFallback;
    use crate::modules::project::application::ports::outgoing::ProjectQueryError;
    use crate::shared::store::ConnectionState;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::store::FixedStoreStatus;

    /* --------------------------------------------------
     * Mock ProjectQuery
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockProjectQuery {
        result: Result<Vec<Project>, ProjectQueryError>,
    }

    impl MockProjectQuery {
        fn success(projects: Vec<Project>) -> Self {
            Self {
                result: Ok(projects),
            }
        }

        fn error(err: ProjectQueryError) -> Self {
            Self { result: Err(err) }
        }

        fn unreachable() -> Self {
            Self::error(ProjectQueryError::DatabaseError(
                "live query must not run".to_string(),
            ))
        }
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
            self.result.clone().map(|projects| {
                projects
                    .into_iter()
                    .filter(|p| !filter.featured_only || p.featured)
                    .collect()
            })
        }

        async fn get_by_id(&self, _id: &str) -> Result<Project, ProjectQueryError> {
            unimplemented!("not used in GetProjectsService tests")
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn gate(state: ConnectionState) -> AvailabilityGate {
        AvailabilityGate::new(Arc::new(FixedStoreStatus::new(state)))
    }

    fn service(
        live: MockProjectQuery,
        state: ConnectionState,
    ) -> GetProjectsService<MockProjectQuery, ProjectQueryFallback> {
        GetProjectsService::new(live, ProjectQueryFallback::new(), gate(state))
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn disconnected_serves_full_fallback_newest_first() {
        let service = service(MockProjectQuery::unreachable(), ConnectionState::Disconnected);

        let projects = service.execute(ProjectListFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 5);
        assert_eq!(projects[0].title, "Salesforce Integration Tool");
        assert!(projects
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn connected_returns_live_documents_as_is() {
        let live = vec![sample_project("live-1", true), sample_project("live-2", false)];
        let service = service(MockProjectQuery::success(live), ConnectionState::Connected);

        let projects = service.execute(ProjectListFilter::default()).await.unwrap();

        assert_eq!(titles(&projects), vec!["Project live-1", "Project live-2"]);
    }

    #[tokio::test]
    async fn live_failure_falls_back_instead_of_failing() {
        let service = service(
            MockProjectQuery::error(ProjectQueryError::DatabaseError("db down".to_string())),
            ConnectionState::Connected,
        );

        let projects = service.execute(ProjectListFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 5);
    }

    #[tokio::test]
    async fn featured_fallback_is_subset_of_full_fallback() {
        let service = service(MockProjectQuery::unreachable(), ConnectionState::Disconnected);

        let all = service.execute(ProjectListFilter::default()).await.unwrap();
        let featured = service.execute(ProjectListFilter::featured()).await.unwrap();

        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));
        assert!(featured.iter().all(|p| all.contains(p)));
        assert_eq!(
            titles(&featured),
            vec!["Task Management App", "E-Commerce Platform"]
        );
    }

    #[tokio::test]
    async fn featured_live_is_filtered() {
        let live = vec![sample_project("a", true), sample_project("b", false)];
        let service = service(MockProjectQuery::success(live), ConnectionState::Connected);

        let featured = service.execute(ProjectListFilter::featured()).await.unwrap();

        assert_eq!(titles(&featured), vec!["Project a"]);
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let service = service(MockProjectQuery::unreachable(), ConnectionState::Disconnected);

        let first = service.execute(ProjectListFilter::default()).await.unwrap();
        let second = service.execute(ProjectListFilter::default()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn reconnect_switches_reads_from_fallback_to_live() {
        let status = Arc::new(FixedStoreStatus::new(ConnectionState::Disconnected));
        let service = GetProjectsService::new(
            MockProjectQuery::success(vec![sample_project("live-1", true)]),
            ProjectQueryFallback::new(),
            AvailabilityGate::new(status.clone()),
        );

        let before = service.execute(ProjectListFilter::default()).await.unwrap();
        assert_eq!(before.len(), 5);
        assert_eq!(before[0].title, "Salesforce Integration Tool");

        status.set(ConnectionState::Connected);

        let after = service.execute(ProjectListFilter::default()).await.unwrap();
        assert_eq!(titles(&after), vec!["Project live-1"]);

        status.set(ConnectionState::Disconnected);

        let again = service.execute(ProjectListFilter::default()).await.unwrap();
        assert_eq!(again, before);
    }
}
