//! Request middleware and extractors

pub mod user_auth;

pub use user_auth::RequireUser;
