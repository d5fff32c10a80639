//! User input validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Invalid phone number format")]
    InvalidPhoneNumber,
}

const MAX_NAME_LENGTH: usize = 255;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Validate a display name
///
/// Rules:
/// - Not empty after trimming
/// - Maximum 255 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an E.164-like phone number
///
/// Rules:
/// - Optional leading `+`
/// - First digit 1-9
/// - 7 to 15 digits total
pub fn validate_phone_number(phone: &str) -> Result<(), UserValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(UserValidationError::InvalidPhoneNumber);
    }

    if digits.starts_with('0') {
        return Err(UserValidationError::InvalidPhoneNumber);
    }

    if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
        return Err(UserValidationError::InvalidPhoneNumber);
    }

    Ok(())
}
