use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Recommender;
use crate::data::AreaCatalog;
use crate::models::{
    AckResponse, ErrorResponse, HealthResponse, HistoryResponse, RecommendRequest,
    RecommendResponse, SaveProfileRequest, SaveUserDataRequest, UserData, UserProfile,
};
use crate::services::{HistoryStore, ProfileStoreClient, ProfileStoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStoreClient>,
    pub history: Arc<HistoryStore>,
    pub catalog: Arc<AreaCatalog>,
    pub recommender: Recommender,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/areas", web::get().to(list_areas))
        .route("/areas/{name}", web::get().to(get_area))
        .route("/history/{user_id}", web::get().to(list_history))
        .route("/history/{user_id}", web::delete().to(clear_history))
        .route(
            "/history/{user_id}/{record_id}",
            web::delete().to(delete_history_record),
        )
        .route("/profile/{user_id}", web::get().to(get_profile))
        .route("/profile/{user_id}", web::put().to(save_profile))
        .route("/userdata/{user_id}", web::get().to(get_user_data))
        .route("/userdata/{user_id}", web::put().to(save_user_data));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compute recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "location": "string",
///   "preferences": {
///     "hospitals": 50, "schools": 50, "parks": 50,
///     "safety": 50, "communityCenters": 50
///   }
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let recommendations = match state
        .recommender
        .recommend(&req.preferences, state.catalog.areas())
    {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::info!("Rejected preference vector for {}: {}", req.user_id, e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid preferences".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    state
        .history
        .record(
            &req.user_id,
            &req.location,
            req.preferences,
            recommendations.clone(),
        )
        .await;

    tracing::info!(
        "Returning {} recommendations for user {} (catalog: {} areas)",
        recommendations.len(),
        req.user_id,
        state.catalog.len()
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommendations,
        total_areas: state.catalog.len(),
        generated_at: chrono::Utc::now(),
    })
}

/// Full catalog listing
///
/// GET /api/v1/areas
async fn list_areas(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.areas())
}

/// Single-area lookup by name (case-insensitive)
///
/// GET /api/v1/areas/{name}
async fn get_area(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match state.catalog.by_name(&name) {
        Some(area) => HttpResponse::Ok().json(area),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Area not found".to_string(),
            message: format!("No area named '{}'", name),
            status_code: 404,
        }),
    }
}

/// List a user's search history, most recent first
///
/// GET /api/v1/history/{userId}
async fn list_history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    let records = state.history.list(&user_id).await;
    let count = records.len();

    HttpResponse::Ok().json(HistoryResponse {
        user_id,
        records,
        count,
    })
}

/// Clear a user's search history
///
/// DELETE /api/v1/history/{userId}
async fn clear_history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    let removed = state.history.clear(&user_id).await;

    tracing::debug!("Cleared {} history records for user {}", removed, user_id);
    HttpResponse::Ok().json(AckResponse { success: true })
}

/// Delete one search-history record
///
/// DELETE /api/v1/history/{userId}/{recordId}
async fn delete_history_record(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (user_id, record_id) = path.into_inner();

    if state.history.delete(&user_id, &record_id).await {
        HttpResponse::Ok().json(AckResponse { success: true })
    } else {
        HttpResponse::NotFound().json(ErrorResponse {
            error: "Record not found".to_string(),
            message: format!("No history record '{}' for user {}", record_id, user_id),
            status_code: 404,
        })
    }
}

/// Fetch a user profile from the remote store
///
/// GET /api/v1/profile/{userId}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.get_profile(&user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error_response(e, "Failed to fetch profile"),
    }
}

/// Save a user profile to the remote store
///
/// PUT /api/v1/profile/{userId}
async fn save_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SaveProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = path.into_inner();
    let profile = UserProfile {
        name: req.name.clone(),
        home_location: req.home_location.clone(),
    };

    match state.store.save_profile(&user_id, &profile).await {
        Ok(()) => HttpResponse::Ok().json(AckResponse { success: true }),
        Err(e) => store_error_response(e, "Failed to save profile"),
    }
}

/// Fetch the saved (preferences, recommendations) pair
///
/// GET /api/v1/userdata/{userId}
async fn get_user_data(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.store.get_user_data(&user_id).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => store_error_response(e, "Failed to fetch user data"),
    }
}

/// Persist a (preferences, recommendations) pair
///
/// PUT /api/v1/userdata/{userId}
async fn save_user_data(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SaveUserDataRequest>,
) -> impl Responder {
    let user_id = path.into_inner();
    let data = UserData {
        preferences: req.preferences,
        recommendations: req.recommendations.clone(),
        saved_at: chrono::Utc::now(),
    };

    match state.store.save_user_data(&user_id, &data).await {
        Ok(()) => HttpResponse::Ok().json(AckResponse { success: true }),
        Err(e) => store_error_response(e, "Failed to save user data"),
    }
}

fn store_error_response(err: ProfileStoreError, context: &str) -> HttpResponse {
    match err {
        ProfileStoreError::NotFound(message) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: context.to_string(),
                message,
                status_code: 404,
            })
        }
        ProfileStoreError::Unauthorized => {
            tracing::error!("{}: store rejected the API key", context);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: context.to_string(),
                message: "Profile store rejected the request".to_string(),
                status_code: 502,
            })
        }
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            catalog_size: 20,
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.catalog_size, 20);
    }
}
