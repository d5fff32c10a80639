//! User domain - phone-number keyed accounts

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_name, validate_phone_number, UserValidationError};
