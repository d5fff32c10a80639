//! Place infrastructure

mod repository;

pub use repository::InMemoryPlaceRepository;
