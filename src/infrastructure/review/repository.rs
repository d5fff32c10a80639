//! In-memory review repository implementation

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::place::PlaceId;
use crate::domain::review::{Rating, Review, ReviewId, ReviewRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of `ReviewRepository`
///
/// Reviews are stored in insertion order per place. The (user, place)
/// uniqueness check and the insert happen under the same write lock, so
/// the constraint is race-safe: of two concurrent creates for the same
/// pair, exactly one succeeds.
#[derive(Debug)]
pub struct InMemoryReviewRepository {
    /// Reviews per place, in insertion order
    by_place: RwLock<HashMap<i64, Vec<Review>>>,
    /// Unique index on the (user, place) pair
    user_place_index: RwLock<HashSet<(i64, i64)>>,
    next_id: AtomicI64,
}

impl InMemoryReviewRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            by_place: RwLock::new(HashMap::new()),
            user_place_index: RwLock::new(HashSet::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn mean(reviews: &[Review]) -> Option<f64> {
        if reviews.is_empty() {
            return None;
        }

        let sum: u32 = reviews.iter().map(|r| r.rating().value() as u32).sum();
        Some(sum as f64 / reviews.len() as f64)
    }
}

impl Default for InMemoryReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(
        &self,
        user_id: UserId,
        place_id: PlaceId,
        rating: Rating,
        text: &str,
    ) -> Result<Review, DomainError> {
        let mut by_place = self.by_place.write().await;
        let mut index = self.user_place_index.write().await;

        let pair = (user_id.as_i64(), place_id.as_i64());

        if index.contains(&pair) {
            return Err(DomainError::duplicate_review());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let review = Review::new(ReviewId::new(id), user_id, place_id, rating, text);

        index.insert(pair);
        by_place
            .entry(place_id.as_i64())
            .or_default()
            .push(review.clone());

        Ok(review)
    }

    async fn exists_for(&self, user_id: UserId, place_id: PlaceId) -> Result<bool, DomainError> {
        let index = self.user_place_index.read().await;
        Ok(index.contains(&(user_id.as_i64(), place_id.as_i64())))
    }

    async fn list_for_place(&self, place_id: PlaceId) -> Result<Vec<Review>, DomainError> {
        let by_place = self.by_place.read().await;
        Ok(by_place.get(&place_id.as_i64()).cloned().unwrap_or_default())
    }

    async fn average_for_place(&self, place_id: PlaceId) -> Result<Option<f64>, DomainError> {
        let by_place = self.by_place.read().await;

        Ok(by_place
            .get(&place_id.as_i64())
            .and_then(|reviews| Self::mean(reviews)))
    }

    async fn average_ratings(&self) -> Result<HashMap<PlaceId, f64>, DomainError> {
        let by_place = self.by_place.read().await;

        let averages = by_place
            .iter()
            .filter_map(|(place_id, reviews)| {
                Self::mean(reviews).map(|avg| (PlaceId::new(*place_id), avg))
            })
            .collect();

        Ok(averages)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let by_place = self.by_place.read().await;
        Ok(by_place.values().map(Vec::len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn rating(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_in_insertion_order() {
        let repo = InMemoryReviewRepository::new();
        let place = PlaceId::new(1);

        repo.create(UserId::new(1), place, rating(4), "first")
            .await
            .unwrap();
        repo.create(UserId::new(2), place, rating(2), "second")
            .await
            .unwrap();
        repo.create(UserId::new(3), place, rating(5), "third")
            .await
            .unwrap();

        let reviews = repo.list_for_place(place).await.unwrap();
        let texts: Vec<&str> = reviews.iter().map(|r| r.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_unique_user_place_pair() {
        let repo = InMemoryReviewRepository::new();
        let place = PlaceId::new(1);
        let user = UserId::new(1);

        repo.create(user, place, rating(4), "once").await.unwrap();

        // Bypasses any service pre-check: the constraint itself rejects
        let result = repo.create(user, place, rating(5), "twice").await;
        assert!(matches!(result, Err(DomainError::DuplicateReview { .. })));

        // Same user may review a different place
        assert!(repo
            .create(user, PlaceId::new(2), rating(3), "elsewhere")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_creates_one_winner() {
        let repo = Arc::new(InMemoryReviewRepository::new());
        let place = PlaceId::new(1);
        let user = UserId::new(1);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(user, place, rating(4), "racing").await
            }));
        }

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::DuplicateReview { .. }) => duplicates += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 7);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_average_for_place() {
        let repo = InMemoryReviewRepository::new();
        let place = PlaceId::new(1);

        assert!(repo.average_for_place(place).await.unwrap().is_none());

        repo.create(UserId::new(1), place, rating(4), "a")
            .await
            .unwrap();
        repo.create(UserId::new(2), place, rating(3), "b")
            .await
            .unwrap();

        let avg = repo.average_for_place(place).await.unwrap();
        assert_eq!(avg, Some(3.5));
    }

    #[tokio::test]
    async fn test_average_ratings_skips_unreviewed_places() {
        let repo = InMemoryReviewRepository::new();

        repo.create(UserId::new(1), PlaceId::new(1), rating(5), "a")
            .await
            .unwrap();
        repo.create(UserId::new(1), PlaceId::new(2), rating(2), "b")
            .await
            .unwrap();
        repo.create(UserId::new(2), PlaceId::new(2), rating(3), "c")
            .await
            .unwrap();

        let averages = repo.average_ratings().await.unwrap();
        assert_eq!(averages.len(), 2);
        assert_eq!(averages.get(&PlaceId::new(1)), Some(&5.0));
        assert_eq!(averages.get(&PlaceId::new(2)), Some(&2.5));
        assert!(!averages.contains_key(&PlaceId::new(3)));
    }
}
