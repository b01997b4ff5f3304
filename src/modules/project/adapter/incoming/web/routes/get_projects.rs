use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects, newest first", body = [Project]),
        (status = 500, description = "Unexpected server error", body = ErrorBody)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_projects(&data, ProjectListFilter::default()).await
}

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects, newest first", body = [Project]),
        (status = 500, description = "Unexpected server error", body = ErrorBody)
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_projects(&data, ProjectListFilter::featured()).await
}

async fn list_projects(data: &AppState, filter: ProjectListFilter) -> HttpResponse {
    match data.project.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryFailed(msg)) => {
            error!(featured_only = filter.featured_only, "Failed to fetch projects: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
