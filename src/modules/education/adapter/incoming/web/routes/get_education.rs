use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::GetEducationError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    responses(
        (
            status = 200,
            description = "Education entries by ascending order; empty when the database is not connected",
            body = [Education]
        ),
        (status = 500, description = "Query failed while connected", body = ErrorBody)
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(GetEducationError::QueryFailed(msg)) => {
            error!("Failed to fetch education: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
