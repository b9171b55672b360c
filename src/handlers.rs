use actix_web::{web, HttpResponse, Responder};

use crate::models::OptimizationRequest;
use crate::solve::{optimize, sample_request};

// ---------- Route handlers ----------

/// POST /api/optimize
pub async fn optimize_handler(req: web::Json<OptimizationRequest>) -> impl Responder {
    // validation problems and infeasibility are part of the body, not the status
    HttpResponse::Ok().json(optimize(&req))
}

/// GET /api/sample
pub async fn sample() -> impl Responder {
    HttpResponse::Ok().json(sample_request())
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

/// JSON extractor config: payload limit plus `400 {"error": ...}` for bodies
/// that don't parse.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
            )
            .into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/api/optimize", web::post().to(optimize_handler))
        .route("/api/sample", web::get().to(sample))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}
