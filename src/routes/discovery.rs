use crate::core::discovery::FeedQuery;
use crate::core::error::DiscoveryError;
use crate::models::{DiscoveryFeedRequest, DiscoveryFeedResponse, ErrorResponse};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/discovery/feed", web::post().to(discovery_feed));
}

/// Discovery feed endpoint
///
/// POST /api/v1/discovery/feed
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "sportId": 1,
///   "pageSize": 20,
///   "page": 1
/// }
/// ```
async fn discovery_feed(
    state: web::Data<AppState>,
    req: web::Json<DiscoveryFeedRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for discovery request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = FeedQuery {
        sport_id: req.sport_id,
        page_size: req.page_size,
        page: req.page,
    };

    tracing::info!(
        "Building discovery feed for user: {}, sport filter: {:?}, page: {}",
        req.user_id,
        req.sport_id,
        query.page
    );

    match state.discovery.build_feed(&req.user_id, &query).await {
        Ok(feed) => {
            tracing::debug!(
                "Returning {} cards for user {} (from {} candidates)",
                feed.cards.len(),
                req.user_id,
                feed.total_candidates
            );

            HttpResponse::Ok().json(DiscoveryFeedResponse {
                cards: feed.cards,
                page: feed.page,
                page_size: feed.page_size,
                total_candidates: feed.total_candidates,
            })
        }
        Err(e @ DiscoveryError::ViewerNotFound(_)) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "profile_not_found".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
        Err(DiscoveryError::Storage(e)) => {
            tracing::error!("Discovery feed failed for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "storage_error".to_string(),
                message: "Failed to build discovery feed".to_string(),
                status_code: 500,
            })
        }
    }
}
