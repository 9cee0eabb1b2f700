//! Driving port for read-only user operations.
//!
//! Inbound adapters (HTTP handlers) use this port without importing storage
//! concerns.

use async_trait::async_trait;

use crate::domain::{Error, RequestedId, User};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the first user whose identifier matches `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when nothing matches.
    async fn find_user(&self, id: RequestedId) -> Result<User, Error>;
}
