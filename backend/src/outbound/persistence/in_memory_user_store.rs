//! In-memory adapter for the user store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

/// User store keeping the collection in process memory.
///
/// Honours the same read-all/write-all contract as the file adapter, which
/// makes it a drop-in substitute for tests.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create a store pre-populated with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    fn poisoned() -> UserStoreError {
        UserStoreError::io("in-memory user store lock poisoned")
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn read_all(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.lock().map_err(|_| Self::poisoned())?;
        Ok(users.clone())
    }

    async fn write_all(&self, users: &[User]) -> Result<(), UserStoreError> {
        let mut stored = self.users.lock().map_err(|_| Self::poisoned())?;
        *stored = users.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserDraft, UserId};
    use serde_json::Number;

    fn user(id: u64) -> User {
        User::from_draft(
            UserId::new(id),
            UserDraft::new("In", "Memory", Number::from(20), None),
        )
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryUserStore::default();
        assert!(store.read_all().await.expect("read").is_empty());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let store = InMemoryUserStore::with_users(vec![user(1)]);
        let users = vec![user(2), user(3)];

        store.write_all(&users).await.expect("write");

        assert_eq!(store.read_all().await.expect("read"), users);
    }
}
