// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::HealthResponse;

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
