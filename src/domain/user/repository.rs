//! User repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::{User, UserId};
use crate::domain::DomainError;

/// Persistence contract for users
///
/// The store enforces phone number uniqueness; `create` fails with
/// `DomainError::Conflict` when the phone number is already registered.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Look up a user by exact phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user, assigning its id
    async fn create(&self, name: &str, phone_number: &str) -> Result<User, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}
