//! User registration and phone-based authentication

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{
    validate_name, validate_phone_number, User, UserId, UserRepository,
};
use crate::domain::DomainError;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub phone_number: String,
}

/// User service for registration and lookup
///
/// Accounts are keyed by phone number and carry no password; presenting a
/// registered phone number is the whole login ceremony.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_phone_number(&request.phone_number)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self
            .repository
            .create(&request.name, &request.phone_number)
            .await?;

        info!(user_id = %user.id(), "User registered");

        Ok(user)
    }

    /// Authenticate by phone number; `None` for unknown or inactive accounts
    pub async fn authenticate_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<User>, DomainError> {
        validate_phone_number(phone_number)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let user = match self.repository.find_by_phone(phone_number).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !user.is_active() {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Get a user by id
    pub async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }
}
