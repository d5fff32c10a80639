//! Review creation service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::cache::Cache;
use crate::domain::place::{PlaceId, PlaceRepository};
use crate::domain::review::{Rating, Review, ReviewRepository};
use crate::domain::user::User;
use crate::domain::DomainError;

use super::place_registry::PlaceRegistry;

/// Request for creating a review
#[derive(Debug, Clone)]
pub struct CreateReviewRequest {
    pub place_name: String,
    pub place_address: String,
    pub rating: i64,
    pub text: String,
}

/// A created review together with its author's display name and the
/// place it resolved to
#[derive(Debug, Clone)]
pub struct CreatedReview {
    pub review: Review,
    pub user_name: String,
    pub place_id: PlaceId,
}

/// Service for creating reviews
///
/// Resolves the place through the registry, rejects duplicates, and clears
/// the whole result cache on success - aggregate ratings may have changed
/// for any cached search or detail payload.
#[derive(Debug)]
pub struct ReviewService<P: PlaceRepository, R: ReviewRepository> {
    registry: PlaceRegistry<P>,
    reviews: Arc<R>,
    cache: Arc<dyn Cache>,
}

impl<P: PlaceRepository, R: ReviewRepository> ReviewService<P, R> {
    pub fn new(registry: PlaceRegistry<P>, reviews: Arc<R>, cache: Arc<dyn Cache>) -> Self {
        Self {
            registry,
            reviews,
            cache,
        }
    }

    /// Create a review on behalf of the authenticated principal
    pub async fn create(
        &self,
        principal: &User,
        request: CreateReviewRequest,
    ) -> Result<CreatedReview, DomainError> {
        let rating =
            Rating::new(request.rating).map_err(|e| DomainError::validation(e.to_string()))?;

        let place = self
            .registry
            .resolve_or_create(&request.place_name, &request.place_address)
            .await?;

        // Fast-path rejection for the common case; the repository's unique
        // constraint remains the authoritative guard under races.
        if self.reviews.exists_for(principal.id(), place.id()).await? {
            debug!(user_id = %principal.id(), place_id = %place.id(), "Duplicate review rejected");
            return Err(DomainError::duplicate_review());
        }

        let review = self
            .reviews
            .create(principal.id(), place.id(), rating, &request.text)
            .await?;

        // Blanket invalidation: coarse, but any cached payload may now be stale
        self.cache.clear().await?;

        info!(
            review_id = %review.id(),
            user_id = %principal.id(),
            place_id = %place.id(),
            "Review created"
        );

        Ok(CreatedReview {
            review,
            user_name: principal.name().to_string(),
            place_id: place.id(),
        })
    }
}
