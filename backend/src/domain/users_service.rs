//! Users domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserStore`]. Every operation reloads the full collection; every
//! successful mutation writes it back in full.
//!
//! Store access is guarded by a per-service reader/writer lock: mutations
//! hold it exclusively across their read-modify-write sequence, reads share
//! it, so a read never observes a collection while it is being rewritten.
//! Separate processes sharing one backing file are not coordinated.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::domain::ports::{UserStore, UserStoreError, UsersCommand, UsersQuery};
use crate::domain::validation::{UserPayloadError, validate_user_payload};
use crate::domain::{Error, RequestedId, User, UserDraft, UserId};

/// Message returned whenever a requested user does not exist.
pub const USER_NOT_FOUND: &str = "user not found";

/// Users service implementing the driving ports.
pub struct UsersService<S> {
    store: Arc<S>,
    store_lock: RwLock<()>,
}

impl<S> UsersService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            store_lock: RwLock::new(()),
        }
    }
}

impl<S> UsersService<S>
where
    S: UserStore,
{
    fn map_store_error(err: &UserStoreError) -> Error {
        error!(error = %err, "user store failure");
        Error::internal(format!("user store failure: {err}"))
    }

    fn map_payload_error(err: &UserPayloadError) -> Error {
        debug!(field = err.field(), code = err.code(), "user payload rejected");
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.code(),
        }))
    }

    fn not_found(id: RequestedId) -> Error {
        debug!(id = %id, "user lookup missed");
        Error::not_found(USER_NOT_FOUND)
    }

    fn validate(payload: &Value) -> Result<UserDraft, Error> {
        validate_user_payload(payload).map_err(|err| Self::map_payload_error(&err))
    }

    async fn load(&self) -> Result<Vec<User>, Error> {
        self.store
            .read_all()
            .await
            .map_err(|err| Self::map_store_error(&err))
    }

    async fn persist(&self, users: &[User]) -> Result<(), Error> {
        self.store
            .write_all(users)
            .await
            .map_err(|err| Self::map_store_error(&err))
    }
}

#[async_trait]
impl<S> UsersQuery for UsersService<S>
where
    S: UserStore,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let _guard = self.store_lock.read().await;
        self.load().await
    }

    async fn find_user(&self, id: RequestedId) -> Result<User, Error> {
        let _guard = self.store_lock.read().await;
        self.load()
            .await?
            .into_iter()
            .find(|user| id.matches(user.id()))
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<S> UsersCommand for UsersService<S>
where
    S: UserStore,
{
    async fn create_user(&self, payload: &Value) -> Result<User, Error> {
        let draft = Self::validate(payload)?;

        let _guard = self.store_lock.write().await;
        let mut users = self.load().await?;
        let id = UserId::next_for_len(users.len())
            .ok_or_else(|| Error::internal("user collection is too large"))?;
        let user = User::from_draft(id, draft);
        users.push(user.clone());
        self.persist(&users).await?;

        info!(id = %user.id(), total = users.len(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: RequestedId, payload: &Value) -> Result<User, Error> {
        let draft = Self::validate(payload)?;

        let _guard = self.store_lock.write().await;
        let mut users = self.load().await?;
        let Some(user) = users.iter_mut().find(|user| id.matches(user.id())) else {
            return Err(Self::not_found(id));
        };
        user.apply(draft);
        let updated = user.clone();
        self.persist(&users).await?;

        info!(id = %updated.id(), "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: RequestedId) -> Result<(), Error> {
        let _guard = self.store_lock.write().await;
        let mut users = self.load().await?;
        let Some(index) = users.iter().position(|user| id.matches(user.id())) else {
            return Err(Self::not_found(id));
        };
        let removed = users.remove(index);
        self.persist(&users).await?;

        info!(id = %removed.id(), total = users.len(), "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
