// Route exports
pub mod discovery;
pub mod swipes;

use crate::core::{DiscoveryEngine, SwipeEngine};
use crate::models::HealthResponse;
use crate::services::PostgresClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub discovery: Arc<DiscoveryEngine>,
    pub swipes: Arc<SwipeEngine>,
    pub postgres: Arc<PostgresClient>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(discovery::configure)
            .configure(swipes::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
