use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError,
};
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

/// Fields are optional here so that a missing one is reported by name
/// instead of as a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Loved your projects!")]
    pub message: Option<String>,
}

impl From<SubmitContactRequest> for SubmitContactCommand {
    fn from(req: SubmitContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Message sent successfully!")]
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (
            status = 201,
            description = "Message stored",
            body = MessageResponse,
            example = json!({ "message": "Message sent successfully!" })
        ),
        (
            status = 400,
            description = "Missing field, malformed body or storage failure",
            body = ErrorBody,
            example = json!({ "message": "name is required" })
        )
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner().into()).await {
        Ok(_) => ApiResponse::created(MessageResponse {
            message: "Message sent successfully!".to_string(),
        }),

        Err(SubmitContactError::Invalid(e)) => ApiResponse::bad_request(&e.to_string()),

        Err(SubmitContactError::PersistenceFailed(msg)) => {
            warn!("Failed to store contact message: {}", msg);
            ApiResponse::bad_request(&msg)
        }
    }
}
