//! Place search and detail endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::place::{PlaceDetail, PlaceId, PlaceSearchResult};
use crate::infrastructure::services::SearchQuery;

/// Create the places router
pub fn create_places_router() -> Router<AppState> {
    Router::new()
        .route("/search/", get(search_places))
        .route("/{id}/", get(place_detail))
}

/// Search query parameters
///
/// `min_rating` is accepted as a raw string; values that do not parse as
/// a number are ignored rather than rejected.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub min_rating: Option<String>,
}

/// Search places by name with optional minimum average rating
///
/// GET /api/places/search/?name=...&min_rating=...
///
/// Results are ranked exact name matches first, then partial matches,
/// alphabetically within each group.
pub async fn search_places(
    State(state): State<AppState>,
    _user: RequireUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlaceSearchResult>>, ApiError> {
    let results = state
        .place_query_service
        .search(&SearchQuery {
            name: params.name,
            min_rating: params.min_rating,
        })
        .await?;

    Ok(Json(results))
}

/// Fetch a place with its reviews and average rating
///
/// GET /api/places/{id}/
///
/// The requesting user's own review, if any, is listed first.
pub async fn place_detail(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<Json<PlaceDetail>, ApiError> {
    let detail = state
        .place_query_service
        .detail(PlaceId::new(id), &user)
        .await?;

    Ok(Json(detail))
}
