// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::analyze::analyze_password,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalyzeResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse,
            crate::analysis::Strength
        )
    ),
    tags(
        (name = "Analysis", description = "Password strength analysis endpoints"),
        (name = "System", description = "Service status endpoints")
    ),
    info(
        title = "Password Strength Analyzer API",
        version = "0.1.0",
        description = "Entropy-based password strength analysis service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting analyzer API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let bind_addr = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin() // Allow requests from any origin during development
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular routes
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
