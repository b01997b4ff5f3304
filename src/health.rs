use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{HealthResponse, ReadinessResponse, StatusResponse};
use crate::AppState;

/// Status line for humans and uptime checks. `connecting` reports as
/// disconnected.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "API is up", body = StatusResponse))
)]
#[get("/")]
pub async fn status(data: web::Data<AppState>) -> impl Responder {
    let database = if data.store_status.is_connected() {
        "Connected"
    } else {
        "Disconnected"
    };

    HttpResponse::Ok().json(StatusResponse {
        message: "Portfolio API is running!",
        database,
    })
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is alive", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reads the store flag kept by the heartbeat, never pings inline
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store connected", body = ReadinessResponse),
        (status = 503, description = "Store not connected", body = ReadinessResponse)
    )
)]
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let state = data.store_status.state();

    if data.store_status.is_connected() {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: state.as_str(),
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: state.as_str(),
        })
    }
}
