use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = String, Path, description = "Project identifier")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (
            status = 404,
            description = "No project with that identifier",
            body = ErrorBody,
            example = json!({ "message": "Project not found" })
        ),
        (status = 500, description = "Unexpected server error", body = ErrorBody)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get_single.execute(&id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!("Failed to fetch project id={}: {}", id, msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
