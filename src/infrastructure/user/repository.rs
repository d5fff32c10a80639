//! In-memory user repository implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of `UserRepository`
///
/// Phone number uniqueness is enforced under the write lock, so the
/// constraint holds under concurrent registration attempts.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    /// Index for phone number -> user id lookup
    phone_index: RwLock<HashMap<String, i64>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            phone_index: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.as_i64()).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        // The index guard must drop before the map read; `create` acquires
        // the two locks in the opposite order.
        let user_id = {
            let phone_index = self.phone_index.read().await;
            phone_index.get(phone_number).copied()
        };

        match user_id {
            Some(user_id) => {
                let users = self.users.read().await;
                Ok(users.get(&user_id).cloned())
            }
            None => Ok(None),
        }
    }

    async fn create(&self, name: &str, phone_number: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut phone_index = self.phone_index.write().await;

        if phone_index.contains_key(phone_number) {
            return Err(DomainError::conflict(format!(
                "Phone number '{}' is already registered",
                phone_number
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(UserId::new(id), name, phone_number);

        phone_index.insert(phone_number.to_string(), id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
