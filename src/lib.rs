//! Place review backend
//!
//! Users register with a phone number, submit one review per place, and
//! search places by name with rating aggregation. Places are created
//! implicitly on first review and de-duplicated case-insensitively by
//! (name, address). Search and detail responses are served through a
//! TTL cache that is cleared whenever a review is written.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use cli::seed::{seed_data, SeedCounts};
use config::AppConfig;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::place::InMemoryPlaceRepository;
use infrastructure::review::InMemoryReviewRepository;
use infrastructure::services::{PlaceQueryService, PlaceRegistry, ReviewService, UserService};
use infrastructure::user::InMemoryUserRepository;

/// Create the application state with all services initialized
///
/// Optionally seeds the stores with random demo data before wiring the
/// services.
pub async fn create_app_state(
    config: &AppConfig,
    seed: Option<SeedCounts>,
) -> anyhow::Result<AppState> {
    let users = Arc::new(InMemoryUserRepository::new());
    let places = Arc::new(InMemoryPlaceRepository::new());
    let reviews = Arc::new(InMemoryReviewRepository::new());

    if let Some(counts) = seed {
        seed_data(users.as_ref(), places.as_ref(), reviews.as_ref(), counts).await?;
    }

    let cache_ttl = Duration::from_secs(config.cache.ttl_seconds);
    let cache: Arc<dyn domain::cache::Cache> = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.cache.max_capacity)
            .with_default_ttl(cache_ttl),
    ));

    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    )));

    let user_service = Arc::new(UserService::new(users.clone()));
    let review_service = Arc::new(ReviewService::new(
        PlaceRegistry::new(places.clone()),
        reviews.clone(),
        cache.clone(),
    ));
    let place_query_service = Arc::new(PlaceQueryService::new(
        users,
        places,
        reviews,
        cache,
        cache_ttl,
    ));

    Ok(AppState::new(
        user_service,
        review_service,
        place_query_service,
        jwt_service,
    ))
}
