//! Driving port for user mutations.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, RequestedId, User};

/// Domain use-case port for creating, replacing, and deleting users.
///
/// Payloads are the raw JSON request bodies; implementations validate them
/// against [`crate::domain::validation`] before touching storage.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate `payload`, append a new user, and return it.
    async fn create_user(&self, payload: &Value) -> Result<User, Error>;

    /// Validate `payload` and overwrite the schema fields of the matching
    /// user.
    async fn update_user(&self, id: RequestedId, payload: &Value) -> Result<User, Error>;

    /// Remove the first user matching `id`.
    async fn delete_user(&self, id: RequestedId) -> Result<(), Error>;
}
