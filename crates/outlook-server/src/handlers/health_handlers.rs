//! Liveness and classifier-strategy probe. No authentication.

use actix_web::{get, web, HttpResponse};

use crate::models::HealthResponse;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[get("/health")]
async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        classifier: state.classifier_name(),
        fallback: state.uses_fallback(),
    })
}
