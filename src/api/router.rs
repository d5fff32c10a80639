use axum::{extract::State, routing::get, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::auth;
use super::health;
use super::places;
use super::reviews;
use super::state::AppState;
use super::types::Json;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no auth required)
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Application API
        // axum's `nest` + inner "/" matches only "/api"; register the
        // trailing-slash form explicitly so "/api/" resolves too.
        .route("/api/", get(api_root))
        .nest("/api", create_api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .merge(auth::create_auth_router())
        .nest("/places", places::create_places_router())
        .merge(reviews::create_reviews_router())
}

/// Endpoint directory returned at the API root
///
/// GET /api/
pub async fn api_root(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Place Review API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "register": "/api/register/",
            "login": "/api/login/",
            "me": "/api/me/",
            "create_review": "/api/reviews/",
            "search_places": "/api/places/search/?name=<name>&min_rating=<rating>",
            "place_detail": "/api/places/<id>/",
        },
    }))
}
