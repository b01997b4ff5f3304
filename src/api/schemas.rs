// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Portfolio API is running!")]
    pub message: &'static str,
    /// `Connected` or `Disconnected`
    #[schema(example = "Connected")]
    pub database: &'static str,
}

/// Liveness probe body
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
}

/// Readiness probe body
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Raw connection state: `connecting`, `connected` or `disconnected`
    #[schema(example = "connected")]
    pub database: &'static str,
}
