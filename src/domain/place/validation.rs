//! Place input validation

use thiserror::Error;

/// Errors that can occur during place validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceValidationError {
    #[error("Place name cannot be empty")]
    EmptyName,

    #[error("Place name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Place address cannot be empty")]
    EmptyAddress,

    #[error("Place address exceeds maximum length of {0} characters")]
    AddressTooLong(usize),
}

const MAX_NAME_LENGTH: usize = 255;
const MAX_ADDRESS_LENGTH: usize = 500;

/// Validate a place name (non-empty, at most 255 characters)
pub fn validate_place_name(name: &str) -> Result<(), PlaceValidationError> {
    if name.trim().is_empty() {
        return Err(PlaceValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(PlaceValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a place address (non-empty, at most 500 characters)
pub fn validate_place_address(address: &str) -> Result<(), PlaceValidationError> {
    if address.trim().is_empty() {
        return Err(PlaceValidationError::EmptyAddress);
    }

    if address.chars().count() > MAX_ADDRESS_LENGTH {
        return Err(PlaceValidationError::AddressTooLong(MAX_ADDRESS_LENGTH));
    }

    Ok(())
}
