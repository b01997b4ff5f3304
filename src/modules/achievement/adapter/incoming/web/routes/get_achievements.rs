use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::incoming::use_cases::GetAchievementsError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "achievements",
    responses(
        (status = 200, description = "Achievements, newest date first", body = [Achievement]),
        (status = 500, description = "Unexpected server error", body = ErrorBody)
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.achievement.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(GetAchievementsError::QueryFailed(msg)) => {
            error!("Failed to fetch achievements: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::achievement::adapter::outgoing::fallback_achievements;
    use crate::modules::achievement::application::ports::incoming::use_cases::GetAchievementsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockGetAchievementsUseCase {
        result: Result<Vec<Achievement>, GetAchievementsError>,
    }

    #[async_trait]
    impl GetAchievementsUseCase for MockGetAchievementsUseCase {
        async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn returns_list() {
        let app_state = TestAppStateBuilder::default()
            .with_get_achievements(MockGetAchievementsUseCase {
                result: Ok(fallback_achievements().to_vec()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_achievements_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/achievements")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().map(Vec::len), Some(4));
        assert_eq!(body[0]["_id"], "a1");
    }

    #[actix_web::test]
    async fn failure_returns_500() {
        let app_state = TestAppStateBuilder::default()
            .with_get_achievements(MockGetAchievementsUseCase {
                result: Err(GetAchievementsError::QueryFailed("nope".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_achievements_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/achievements")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
