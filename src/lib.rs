pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

pub use modules::achievement;
pub use modules::contact;
pub use modules::education;
pub use modules::email;
pub use modules::experience;
pub use modules::project;
pub use modules::skill;

#[cfg(test)]
mod tests;

use actix_web::web;
use std::sync::Arc;

use crate::achievement::application::ports::incoming::use_cases::GetAchievementsUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::education::application::ports::incoming::use_cases::GetEducationUseCase;
use crate::experience::application::ports::incoming::use_cases::GetExperiencesUseCase;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::store::StoreStatus;
use crate::skill::application::ports::incoming::use_cases::GetSkillsUseCase;

#[derive(Clone)]
pub struct AppState {
    pub store_status: Arc<dyn StoreStatus>,
    pub project: ProjectUseCases,
    pub skill: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub education: Arc<dyn GetEducationUseCase + Send + Sync>,
    pub experience: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub achievement: Arc<dyn GetAchievementsUseCase + Send + Sync>,
    pub contact: ContactUseCases,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::status);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects; featured must precede {id}
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_id_handler);
    // Profile
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::get_achievements_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_contact_messages_handler);
}

#[cfg(test)]
mod routing_tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    use crate::project::application::domain::entities::Project;
    use crate::project::application::ports::incoming::use_cases::{
        GetProjectsError, GetProjectsUseCase,
    };
    use crate::project::application::ports::outgoing::ProjectListFilter;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_project;

    #[derive(Clone, Default)]
    struct RecordingGetProjects {
        filters: Arc<Mutex<Vec<ProjectListFilter>>>,
    }

    #[async_trait]
    impl GetProjectsUseCase for RecordingGetProjects {
        async fn execute(
            &self,
            filter: ProjectListFilter,
        ) -> Result<Vec<Project>, GetProjectsError> {
            self.filters.lock().unwrap().push(filter);
            Ok(vec![sample_project("1", true)])
        }
    }

    #[actix_web::test]
    async fn featured_is_not_routed_as_an_id() {
        let use_case = RecordingGetProjects::default();
        let filters = use_case.filters.clone();

        let app_state = TestAppStateBuilder::default()
            .with_get_projects(use_case)
            .build();
        let app = test::init_service(App::new().app_data(app_state).configure(init_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/featured")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*filters.lock().unwrap(), vec![ProjectListFilter::featured()]);
    }

    #[actix_web::test]
    async fn every_public_route_is_registered() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .configure(init_routes),
        )
        .await;

        for uri in [
            "/",
            "/health",
            "/ready",
            "/api/projects",
            "/api/projects/featured",
            "/api/skills",
            "/api/education",
            "/api/experience",
            "/api/achievements",
            "/api/contact",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
        }

        // default stub reports a miss
        let req = test::TestRequest::get().uri("/api/projects/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Project not found");
    }
}
