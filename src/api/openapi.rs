use crate::api::schemas::{HealthResponse, ReadinessResponse, StatusResponse};
use crate::shared::api::ErrorBody;
use utoipa::OpenApi;

use crate::modules::achievement::application::domain::entities::{
    Achievement, AchievementCategory,
};
use crate::modules::contact::adapter::incoming::web::routes::{
    MessageResponse, SubmitContactRequest,
};
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceType};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::skill::application::domain::entities::{Skill, SkillCategory, SkillLevel};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read API for portfolio content, with a contact form endpoint"
    ),
    paths(
        // Health
        crate::health::status,
        crate::health::health,
        crate::health::readiness,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,

        // Profile
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::education::adapter::incoming::web::routes::get_education_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::achievement::adapter::incoming::web::routes::get_achievements_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_contact_messages_handler,
    ),
    components(
        schemas(
            ErrorBody,
            StatusResponse,
            HealthResponse,
            ReadinessResponse,

            Project,
            ProjectCategory,
            Skill,
            SkillCategory,
            SkillLevel,
            Education,
            Experience,
            ExperienceType,
            Achievement,
            AchievementCategory,

            ContactMessage,
            SubmitContactRequest,
            MessageResponse
        )
    ),
    tags(
        (name = "health", description = "Status and probes"),
        (name = "projects", description = "Portfolio projects"),
        (name = "skills", description = "Skills grouped by category"),
        (name = "education", description = "Education history"),
        (name = "experience", description = "Work experience"),
        (name = "achievements", description = "Achievements and certifications"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;
