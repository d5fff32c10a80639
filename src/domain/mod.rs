//! Domain layer - entities, repository traits, and validation

pub mod cache;
pub mod error;
pub mod place;
pub mod review;
pub mod user;

pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use place::{
    Place, PlaceDetail, PlaceId, PlaceRepository, PlaceSearchResult, ReviewWithAuthor,
};
pub use review::{Rating, Review, ReviewId, ReviewRepository};
pub use user::{User, UserId, UserRepository};
