//! Place repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::{Place, PlaceId};
use crate::domain::DomainError;

/// Persistence contract for places
///
/// The store enforces uniqueness of the (name, address) pair under
/// case-insensitive comparison; `create` fails with `DomainError::Conflict`
/// when an equivalent pair already exists.
#[async_trait]
pub trait PlaceRepository: Send + Sync + Debug {
    /// Get a place by id
    async fn get(&self, id: PlaceId) -> Result<Option<Place>, DomainError>;

    /// Look up a place whose name and address both match case-insensitively
    async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<Place>, DomainError>;

    /// Insert a new place with the exact-case inputs, assigning its id
    async fn create(&self, name: &str, address: &str) -> Result<Place, DomainError>;

    /// All places whose name contains the fragment case-insensitively
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Place>, DomainError>;

    /// All stored places, in no particular order
    async fn list(&self) -> Result<Vec<Place>, DomainError>;

    /// Number of stored places
    async fn count(&self) -> Result<usize, DomainError>;
}
