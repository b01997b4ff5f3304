//! Requests through the real services and gate, with only the store faked.

use actix_web::{http::StatusCode, test, web, App};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::achievement::adapter::outgoing::{AchievementQueryFallback, AchievementQueryPostgres};
use crate::achievement::application::service::GetAchievementsService;
use crate::contact::application::service::{ListContactMessagesService, SubmitContactService};
use crate::education::adapter::outgoing::EducationQueryPostgres;
use crate::education::application::service::GetEducationService;
use crate::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::experience::application::service::GetExperiencesService;
use crate::init_routes;
use crate::project::adapter::outgoing::{ProjectQueryFallback, ProjectQueryPostgres};
use crate::project::application::service::{GetProjectsService, GetSingleProjectService};
use crate::shared::api::custom_json_config;
use crate::shared::store::{AvailabilityGate, ConnectionState};
use crate::skill::adapter::outgoing::SkillQueryPostgres;
use crate::skill::application::service::GetSkillsService;
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::contact_store::InMemoryContactStore;
use crate::tests::support::store::FixedStoreStatus;
use crate::AppState;

fn store_down_state() -> web::Data<AppState> {
    let db = Arc::new(DatabaseConnection::Disconnected);
    let gate = AvailabilityGate::new(Arc::new(FixedStoreStatus::new(
        ConnectionState::Disconnected,
    )));
    let projects = ProjectQueryPostgres::new(Arc::clone(&db));

    TestAppStateBuilder::default()
        .with_store_status(FixedStoreStatus::new(ConnectionState::Disconnected))
        .with_get_projects(GetProjectsService::new(
            projects.clone(),
            ProjectQueryFallback::new(),
            gate.clone(),
        ))
        .with_get_single_project(GetSingleProjectService::new(
            projects,
            ProjectQueryFallback::new(),
            gate.clone(),
        ))
        .with_get_skills(GetSkillsService::new(
            SkillQueryPostgres::new(Arc::clone(&db)),
            gate.clone(),
        ))
        .with_get_education(GetEducationService::new(
            EducationQueryPostgres::new(Arc::clone(&db)),
            gate.clone(),
        ))
        .with_get_experiences(GetExperiencesService::new(
            ExperienceQueryPostgres::new(Arc::clone(&db)),
            gate.clone(),
        ))
        .with_get_achievements(GetAchievementsService::new(
            AchievementQueryPostgres::new(db),
            AchievementQueryFallback::new(),
            gate,
        ))
        .build()
}

#[actix_web::test]
async fn store_down_serves_fallbacks_and_empty_profile_sections() {
    let app = test::init_service(
        App::new()
            .app_data(store_down_state())
            .configure(init_routes),
    )
    .await;

    let get = |uri: &'static str| test::TestRequest::get().uri(uri).to_request();

    let resp = test::call_service(&app, get("/api/projects")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let projects: Value = test::read_body_json(resp).await;
    assert_eq!(projects.as_array().map(Vec::len), Some(5));
    assert_eq!(projects[0]["title"], "Salesforce Integration Tool");

    let resp = test::call_service(&app, get("/api/projects/featured")).await;
    let featured: Value = test::read_body_json(resp).await;
    assert_eq!(featured.as_array().map(Vec::len), Some(2));

    let resp = test::call_service(&app, get("/api/projects/5")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let project: Value = test::read_body_json(resp).await;
    assert_eq!(project["_id"], "5");

    let resp = test::call_service(&app, get("/api/projects/99")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get("/api/achievements")).await;
    let achievements: Value = test::read_body_json(resp).await;
    assert_eq!(achievements.as_array().map(Vec::len), Some(4));

    let resp = test::call_service(&app, get("/api/education")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let education: Value = test::read_body_json(resp).await;
    assert_eq!(education, json!([]));

    let resp = test::call_service(&app, get("/api/experience")).await;
    let experience: Value = test::read_body_json(resp).await;
    assert_eq!(experience, json!([]));

    let resp = test::call_service(&app, get("/api/skills")).await;
    let skills: Value = test::read_body_json(resp).await;
    assert_eq!(skills, json!({}));
}

#[actix_web::test]
async fn submitted_message_is_listed_first() {
    let store = InMemoryContactStore::default();
    let gate = AvailabilityGate::new(Arc::new(FixedStoreStatus::new(ConnectionState::Connected)));

    let app_state = TestAppStateBuilder::default()
        .with_submit_contact(SubmitContactService::new(store.clone(), gate.clone(), None))
        .with_list_contact_messages(ListContactMessagesService::new(store.clone(), gate))
        .build();

    let app = test::init_service(
        App::new()
            .app_data(app_state)
            .app_data(custom_json_config())
            .configure(init_routes),
    )
    .await;

    for (name, message) in [("First", "hello"), ("Second", "hi again")] {
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": name, "email": "a@x.com", "message": message }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // rejected submissions leave no trace
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "name": "Third", "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.stored_count(), 2);

    let req = test::TestRequest::get().uri("/api/contact").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
    assert_eq!(listed[0]["name"], "Second");
    assert_eq!(listed[0]["message"], "hi again");
    assert!(listed[0]["_id"].is_string());
    assert!(listed[0]["createdAt"].is_string());
    assert_eq!(listed[1]["name"], "First");
}
