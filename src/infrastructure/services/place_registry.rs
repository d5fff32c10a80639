//! Place registry - find-or-create with case-insensitive de-duplication

use std::sync::Arc;

use tracing::debug;

use crate::domain::place::{
    validate_place_address, validate_place_name, Place, PlaceRepository,
};
use crate::domain::DomainError;

/// Resolves submitted (name, address) pairs to one canonical place
#[derive(Debug)]
pub struct PlaceRegistry<P: PlaceRepository> {
    places: Arc<P>,
}

impl<P: PlaceRepository> PlaceRegistry<P> {
    pub fn new(places: Arc<P>) -> Self {
        Self { places }
    }

    /// Return the existing place matching (name, address) case-insensitively,
    /// or create one with the exact-case inputs.
    ///
    /// When creation loses a uniqueness race to a concurrent caller, the
    /// lookup is retried once and the winner's row is returned.
    pub async fn resolve_or_create(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Place, DomainError> {
        validate_place_name(name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_place_address(address).map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(place) = self.places.find_by_name_and_address(name, address).await? {
            debug!(place_id = %place.id(), "Resolved existing place");
            return Ok(place);
        }

        match self.places.create(name, address).await {
            Ok(place) => {
                debug!(place_id = %place.id(), name, "Created place");
                Ok(place)
            }
            Err(DomainError::Conflict { .. }) => {
                // Lost the creation race; the winner's row satisfies the lookup
                self.places
                    .find_by_name_and_address(name, address)
                    .await?
                    .ok_or_else(|| {
                        DomainError::conflict(format!(
                            "Place '{}' at '{}' could not be resolved after a creation conflict",
                            name, address
                        ))
                    })
            }
            Err(other) => Err(other),
        }
    }
}
