//! Infrastructure layer - Concrete repositories, cache, auth, and services

pub mod auth;
pub mod cache;
pub mod logging;
pub mod place;
pub mod review;
pub mod services;
pub mod user;
