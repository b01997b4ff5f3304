use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (
            status = 200,
            description = "Experience entries in insertion order; empty when the database is not connected",
            body = [Experience]
        ),
        (status = 500, description = "Query failed while connected", body = ErrorBody)
    )
)]
#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.execute().await {
        Ok(list) => ApiResponse::success(list),
        Err(GetExperiencesError::QueryFailed(msg)) => {
            error!("Failed to fetch experience: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
