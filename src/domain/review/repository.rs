//! Review repository trait

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use super::{Rating, Review};
use crate::domain::place::PlaceId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Persistence contract for reviews
///
/// The store enforces uniqueness of the (user, place) pair; `create` fails
/// with `DomainError::DuplicateReview` when the pair already has a review.
/// This constraint, not the callers' pre-checks, is the authoritative guard
/// under concurrent writes.
#[async_trait]
pub trait ReviewRepository: Send + Sync + Debug {
    /// Insert a new review, assigning its id
    async fn create(
        &self,
        user_id: UserId,
        place_id: PlaceId,
        rating: Rating,
        text: &str,
    ) -> Result<Review, DomainError>;

    /// Whether the user already reviewed the place
    async fn exists_for(&self, user_id: UserId, place_id: PlaceId) -> Result<bool, DomainError>;

    /// All reviews for a place, in store order (insertion order); callers
    /// must not rely on any finer ordering guarantee
    async fn list_for_place(&self, place_id: PlaceId) -> Result<Vec<Review>, DomainError>;

    /// Mean rating for one place; `None` when it has no reviews
    async fn average_for_place(&self, place_id: PlaceId) -> Result<Option<f64>, DomainError>;

    /// Mean rating per place, for every place with at least one review
    async fn average_ratings(&self) -> Result<HashMap<PlaceId, f64>, DomainError>;

    /// Number of stored reviews
    async fn count(&self) -> Result<usize, DomainError>;
}
