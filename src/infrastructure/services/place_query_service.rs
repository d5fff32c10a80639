//! Cached place search and detail queries

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::cache::{key, Cache, CacheExt};
use crate::domain::place::{
    Place, PlaceDetail, PlaceId, PlaceRepository, PlaceSearchResult, ReviewWithAuthor,
};
use crate::domain::review::ReviewRepository;
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Search parameters, taken verbatim from the query string
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub min_rating: Option<String>,
}

/// Read side of the place API: search with rating aggregation, and
/// per-viewer place detail. Both are read-through cached.
#[derive(Debug)]
pub struct PlaceQueryService<U, P, R>
where
    U: UserRepository,
    P: PlaceRepository,
    R: ReviewRepository,
{
    users: Arc<U>,
    places: Arc<P>,
    reviews: Arc<R>,
    cache: Arc<dyn Cache>,
    cache_ttl: Duration,
}

impl<U, P, R> PlaceQueryService<U, P, R>
where
    U: UserRepository,
    P: PlaceRepository,
    R: ReviewRepository,
{
    pub fn new(
        users: Arc<U>,
        places: Arc<P>,
        reviews: Arc<R>,
        cache: Arc<dyn Cache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            users,
            places,
            reviews,
            cache,
            cache_ttl,
        }
    }

    /// Number of known places, read straight from the repository.
    ///
    /// Used by readiness probes; never touches the result cache.
    pub async fn place_count(&self) -> Result<usize, DomainError> {
        self.places.count().await
    }

    /// Search places by optional name fragment and minimum average rating.
    ///
    /// An unparseable `min_rating` is ignored rather than rejected.
    pub async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<PlaceSearchResult>, DomainError> {
        // Empty-after-trim name counts as absent
        let name = query
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        let cache_key = key::search_key(name, query.min_rating.as_deref());

        if let Some(cached) = self.cache.get::<Vec<PlaceSearchResult>>(&cache_key).await? {
            debug!(key = %cache_key, "Search cache hit");
            return Ok(cached);
        }

        let averages = self.reviews.average_ratings().await?;

        let mut places = match name {
            Some(fragment) => self.places.search_by_name(fragment).await?,
            None => self.places.list().await?,
        };

        match name {
            Some(fragment) => {
                // Exact case-insensitive matches first, then alphabetical
                let needle = fragment.to_lowercase();
                places.sort_by(|a, b| {
                    match_rank(a, &needle)
                        .cmp(&match_rank(b, &needle))
                        .then_with(|| a.name().cmp(b.name()))
                });
            }
            None => places.sort_by(|a, b| a.name().cmp(b.name())),
        }

        // Lenient by design: a malformed filter is dropped, not surfaced
        let min_rating = query
            .min_rating
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok());

        let results: Vec<PlaceSearchResult> = places
            .into_iter()
            .filter_map(|place| {
                let average_rating = averages.get(&place.id()).copied();

                if let Some(min) = min_rating {
                    // Places without a rating have no average to compare
                    match average_rating {
                        Some(avg) if avg >= min => {}
                        _ => return None,
                    }
                }

                Some(PlaceSearchResult {
                    id: place.id(),
                    name: place.name().to_string(),
                    average_rating,
                })
            })
            .collect();

        self.cache.set(&cache_key, &results, self.cache_ttl).await?;

        Ok(results)
    }

    /// Fetch a place with its reviews, the viewer's own review first.
    ///
    /// Reviews other than the viewer's keep store order; no ordering
    /// contract is offered for them.
    pub async fn detail(
        &self,
        place_id: PlaceId,
        principal: &User,
    ) -> Result<PlaceDetail, DomainError> {
        let cache_key = key::detail_key(place_id, principal.id());

        if let Some(cached) = self.cache.get::<PlaceDetail>(&cache_key).await? {
            debug!(key = %cache_key, "Detail cache hit");
            return Ok(cached);
        }

        let place = self
            .places
            .get(place_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Place {} not found", place_id)))?;

        let reviews = self.reviews.list_for_place(place_id).await?;

        let average_rating = self
            .reviews
            .average_for_place(place_id)
            .await?
            .map(round_to_2dp);

        let mut own: Option<ReviewWithAuthor> = None;
        let mut others: Vec<ReviewWithAuthor> = Vec::with_capacity(reviews.len());

        for review in reviews {
            let author = self
                .users
                .get(review.user_id())
                .await?
                .ok_or_else(|| {
                    DomainError::internal(format!(
                        "Review {} references missing user {}",
                        review.id(),
                        review.user_id()
                    ))
                })?;

            let entry = ReviewWithAuthor {
                id: review.id(),
                rating: review.rating().value(),
                text: review.text().to_string(),
                user_name: author.name().to_string(),
                created_at: review.created_at(),
            };

            if review.user_id() == principal.id() {
                own = Some(entry);
            } else {
                others.push(entry);
            }
        }

        let ordered = own.into_iter().chain(others).collect();

        let detail = PlaceDetail {
            id: place.id(),
            name: place.name().to_string(),
            address: place.address().to_string(),
            average_rating,
            reviews: ordered,
            created_at: place.created_at(),
        };

        self.cache.set(&cache_key, &detail, self.cache_ttl).await?;

        Ok(detail)
    }
}

/// 0 for an exact case-insensitive name match, 1 otherwise
fn match_rank(place: &Place, needle_lower: &str) -> u8 {
    if place.name().to_lowercase() == needle_lower {
        0
    } else {
        1
    }
}

fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
