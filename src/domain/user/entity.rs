//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned sequentially by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account, registered and looked up by phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name
    name: String,
    /// Unique phone number in E.164-like format
    phone_number: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Whether the account may authenticate
    is_active: bool,
    /// Whether the account has staff privileges
    is_staff: bool,
}

impl User {
    /// Create a new active, non-staff user
    pub fn new(id: UserId, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            created_at: Utc::now(),
            is_active: true,
            is_staff: false,
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    // Mutators

    /// Deactivate the account, blocking future logins
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivate a deactivated account
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Grant staff privileges
    pub fn promote_to_staff(&mut self) {
        self.is_staff = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(UserId::new(1), "Alice", "+15551234567");

        assert_eq!(user.id().as_i64(), 1);
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.phone_number(), "+15551234567");
        assert!(user.is_active());
        assert!(!user.is_staff());
    }

    #[test]
    fn test_user_deactivate_and_activate() {
        let mut user = User::new(UserId::new(1), "Alice", "+15551234567");

        user.deactivate();
        assert!(!user.is_active());

        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn test_user_promote_to_staff() {
        let mut user = User::new(UserId::new(1), "Alice", "+15551234567");

        user.promote_to_staff();
        assert!(user.is_staff());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
