//! Review submission endpoint

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::services::{CreateReviewRequest, CreatedReview};

/// Create the reviews router
pub fn create_reviews_router() -> Router<AppState> {
    Router::new().route("/reviews/", post(create_review))
}

/// Review creation payload
///
/// The place is identified by (name, address); it is created on first
/// reference, so clients never submit place ids.
#[derive(Debug, Deserialize)]
pub struct CreateReviewPayload {
    pub place_name: String,
    pub place_address: String,
    pub rating: i64,
    pub text: String,
}

/// Review creation response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateReviewResponse {
    pub message: String,
    pub review: ReviewResponse,
    pub place_id: i64,
}

/// A review as rendered in API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub rating: u8,
    pub text: String,
    pub user_name: String,
    pub created_at: String,
}

impl ReviewResponse {
    fn from_created(created: &CreatedReview) -> Self {
        Self {
            id: created.review.id().as_i64(),
            rating: created.review.rating().value(),
            text: created.review.text().to_string(),
            user_name: created.user_name.clone(),
            created_at: created.review.created_at().to_rfc3339(),
        }
    }
}

/// Submit a review for a place
///
/// POST /api/reviews/
///
/// Creates the place if this is its first review. Each user may review a
/// given place at most once; duplicates are rejected with 400.
pub async fn create_review(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<CreateReviewResponse>), ApiError> {
    let created = state
        .review_service
        .create(
            &user,
            CreateReviewRequest {
                place_name: payload.place_name,
                place_address: payload.place_address,
                rating: payload.rating,
                text: payload.text,
            },
        )
        .await?;

    let response = CreateReviewResponse {
        message: "Review submitted successfully".to_string(),
        review: ReviewResponse::from_created(&created),
        place_id: created.place_id.as_i64(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
