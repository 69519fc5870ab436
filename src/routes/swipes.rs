use crate::core::error::SwipeError;
use crate::models::{ErrorResponse, SwipeLikeRequest, SwipeLikeResponse};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure swipe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/swipes/like", web::post().to(swipe_like));
}

/// Like swipe endpoint
///
/// POST /api/v1/swipes/like
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "likedUserId": "string"
/// }
/// ```
async fn swipe_like(
    state: web::Data<AppState>,
    req: web::Json<SwipeLikeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for swipe request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Swipe: {} likes {}", req.user_id, req.liked_user_id);

    match state.swipes.swipe_like(&req.user_id, &req.liked_user_id).await {
        Ok(outcome) => HttpResponse::Ok().json(SwipeLikeResponse {
            is_match: outcome.is_match,
            match_id: outcome.match_id,
            matched_user_name: outcome.matched_user_name,
        }),
        Err(e @ SwipeError::SelfLike) => HttpResponse::Conflict().json(ErrorResponse {
            error: "self_like".to_string(),
            message: e.to_string(),
            status_code: 409,
        }),
        Err(e @ SwipeError::AlreadyLiked) => HttpResponse::Conflict().json(ErrorResponse {
            error: "already_liked".to_string(),
            message: e.to_string(),
            status_code: 409,
        }),
        Err(e @ SwipeError::LikedUserNotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "liked_user_not_found".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
        Err(SwipeError::Storage(e)) => {
            tracing::error!(
                "Swipe failed for {} -> {}: {}",
                req.user_id,
                req.liked_user_id,
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "storage_error".to_string(),
                message: "Failed to record swipe".to_string(),
                status_code: 500,
            })
        }
    }
}
