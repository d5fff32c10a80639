//! Review infrastructure

mod repository;

pub use repository::InMemoryReviewRepository;
