//! Place domain - de-duplicated places and their query payloads

mod entity;
mod repository;
mod validation;

pub use entity::{Place, PlaceDetail, PlaceId, PlaceSearchResult, ReviewWithAuthor};
pub use repository::PlaceRepository;
pub use validation::{validate_place_address, validate_place_name, PlaceValidationError};
