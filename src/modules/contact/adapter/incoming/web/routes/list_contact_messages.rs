use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::ListContactMessagesError;
use crate::shared::api::{ApiResponse, ErrorBody};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Submitted messages, newest first", body = [ContactMessage]),
        (
            status = 500,
            description = "Database unavailable or query failed",
            body = ErrorBody,
            example = json!({ "message": "Database is disconnected" })
        )
    )
)]
#[get("/api/contact")]
pub async fn list_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(ListContactMessagesError::Unavailable(msg))
        | Err(ListContactMessagesError::QueryFailed(msg)) => {
            error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error(&msg)
        }
    }
}
