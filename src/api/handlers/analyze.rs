// src/api/handlers/analyze.rs
use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::analysis;
use crate::api::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::core::config::Config;

/// Analyze password strength
///
/// Computes charset, entropy, combination count and estimated crack time for
/// the submitted password and classifies its strength.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalyzeResponse),
        (status = 400, description = "Empty or missing password", body = ErrorResponse)
    )
)]
pub async fn analyze_password(
    config: web::Data<Config>,
    request: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if request.password.is_empty() {
        debug!("rejecting analyze request with empty password");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "No password provided".to_string(),
        });
    }

    // The password itself is never logged; analysis only reports metrics.
    let result = analysis::analyze(&request.password, config.guesses_per_sec);

    HttpResponse::Ok().json(AnalyzeResponse::from(result))
}

/// CORS preflight for the analyze endpoint
pub async fn analyze_options() -> impl Responder {
    HttpResponse::Ok().finish()
}
