// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/solve")
                    .route("", web::post().to(handlers::solve))
                    .route("/batch", web::post().to(handlers::solve_batch))
            )
            .service(
                web::scope("/config")
                    .route("", web::get().to(handlers::get_config))
                    .route("", web::put().to(handlers::update_config))
            )
    );
}
