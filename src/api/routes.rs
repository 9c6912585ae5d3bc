// src/api/routes.rs
use actix_web::guard;
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Analysis API
    cfg.service(
        web::scope("/api")
            // POST: Analyze a password
            .route("/analyze", web::post().to(handlers::analyze::analyze_password))
            // OPTIONS: Analyze (for CORS preflight if needed)
            .route(
                "/analyze",
                web::route()
                    .guard(guard::Options())
                    .to(handlers::analyze::analyze_options),
            ),
    );

    // Health check
    cfg.route("/health", web::get().to(handlers::system::health));

    // Embedded meter page and assets
    cfg.route("/", web::get().to(handlers::pages::index));
    cfg.service(
        web::scope("/static")
            .route("/script.js", web::get().to(handlers::pages::script))
            .route("/style.css", web::get().to(handlers::pages::stylesheet)),
    );
}
