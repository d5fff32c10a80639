//! Concrete services wiring repositories, cache, and validation together

mod place_query_service;
mod place_registry;
mod review_service;
mod user_service;

pub use place_query_service::{PlaceQueryService, SearchQuery};
pub use place_registry::PlaceRegistry;
pub use review_service::{CreateReviewRequest, CreatedReview, ReviewService};
pub use user_service::{RegisterUserRequest, UserService};
