//! Review domain - one review per user per place

mod entity;
mod repository;

pub use entity::{Rating, RatingOutOfRange, Review, ReviewId};
pub use repository::ReviewRepository;
