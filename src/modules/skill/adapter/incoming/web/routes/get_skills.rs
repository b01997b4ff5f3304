use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (
            status = 200,
            description = "Skills grouped by category; empty object when the database is not connected",
            body = std::collections::BTreeMap<String, Vec<Skill>>,
            example = json!({
                "languages": [
                    { "_id": "6650f1...", "category": "languages", "name": "Java", "level": "advanced" }
                ]
            })
        ),
        (status = 500, description = "Query failed while connected", body = ErrorBody)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.execute().await {
        Ok(grouped) => ApiResponse::success(grouped),
        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to fetch skills: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
