//! In-memory place repository implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::place::{Place, PlaceId, PlaceRepository};
use crate::domain::DomainError;

/// In-memory implementation of `PlaceRepository`
///
/// Rows keep their original casing; the uniqueness index is keyed on the
/// lowercased (name, address) pair and maintained under the write lock, so
/// two concurrent creates of an equivalent pair cannot both succeed.
#[derive(Debug)]
pub struct InMemoryPlaceRepository {
    places: RwLock<HashMap<i64, Place>>,
    /// Index for lowercase (name, address) -> place id lookup
    name_address_index: RwLock<HashMap<(String, String), i64>>,
    next_id: AtomicI64,
}

impl InMemoryPlaceRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            places: RwLock::new(HashMap::new()),
            name_address_index: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn normalized_key(name: &str, address: &str) -> (String, String) {
        (name.to_lowercase(), address.to_lowercase())
    }
}

impl Default for InMemoryPlaceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn get(&self, id: PlaceId) -> Result<Option<Place>, DomainError> {
        let places = self.places.read().await;
        Ok(places.get(&id.as_i64()).cloned())
    }

    async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Option<Place>, DomainError> {
        // The index guard must drop before the map read; `create` acquires
        // the two locks in the opposite order.
        let place_id = {
            let index = self.name_address_index.read().await;
            index.get(&Self::normalized_key(name, address)).copied()
        };

        match place_id {
            Some(place_id) => {
                let places = self.places.read().await;
                Ok(places.get(&place_id).cloned())
            }
            None => Ok(None),
        }
    }

    async fn create(&self, name: &str, address: &str) -> Result<Place, DomainError> {
        let mut places = self.places.write().await;
        let mut index = self.name_address_index.write().await;

        let key = Self::normalized_key(name, address);

        if index.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Place '{}' at '{}' already exists",
                name, address
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let place = Place::new(PlaceId::new(id), name, address);

        index.insert(key, id);
        places.insert(id, place.clone());

        Ok(place)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Place>, DomainError> {
        let needle = fragment.to_lowercase();
        let places = self.places.read().await;

        let result: Vec<Place> = places
            .values()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Place>, DomainError> {
        let places = self.places.read().await;
        Ok(places.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let places = self.places.read().await;
        Ok(places.len())
    }
}
