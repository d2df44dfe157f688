//! Route table for the posts API.

use crate::error::{messages, AppError};
use crate::handlers;
use actix_web::web;

/// Bodies that fail to deserialize are reported as the resource's
/// validation error, the same as a body missing its required fields.
fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::Validation(message).into()
    })
}

/// Mount `/api/posts` and everything nested under it
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(
                web::resource(["", "/"])
                    .app_data(json_config(messages::POST_PAYLOAD_INVALID))
                    .route(web::get().to(handlers::list_posts))
                    .route(web::post().to(handlers::create_post)),
            )
            // Registered before "/{post_id}/..." so "comments" is never read as a post id
            .service(
                web::resource("/comments/{comment_id}")
                    .route(web::get().to(handlers::get_comment)),
            )
            .service(
                web::resource("/{post_id}")
                    .app_data(json_config(messages::POST_PAYLOAD_INVALID))
                    .route(web::get().to(handlers::get_post))
                    .route(web::put().to(handlers::update_post))
                    .route(web::delete().to(handlers::delete_post)),
            )
            .service(
                web::resource("/{post_id}/comments")
                    .app_data(json_config(messages::COMMENT_PAYLOAD_INVALID))
                    .route(web::get().to(handlers::list_post_comments))
                    .route(web::post().to(handlers::create_comment)),
            )
            .service(
                web::resource("/{post_id}/comments/{comment_id}")
                    .route(web::get().to(handlers::get_post_comment)),
            ),
    );
}

/// Health, metrics and API description endpoints
pub fn configure_operational(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .route("/api/health", web::get().to(handlers::health_summary))
        .route("/api/health/ready", web::get().to(handlers::readiness_summary))
        .route("/api/health/live", web::get().to(handlers::liveness_check))
        .route("/api/openapi.json", web::get().to(crate::openapi::openapi_json));
}
