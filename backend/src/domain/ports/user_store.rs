//! Driven port for whole-collection user storage.
//!
//! The contract is deliberately coarse: adapters hand back the entire
//! collection and accept the entire collection. There is no per-record
//! access, indexing, or transaction support.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Stored contents are not a valid JSON array of users.
        Parse { message: String } => "user store contents are not valid: {message}",
        /// Reading or writing the backing medium failed.
        Io { message: String } => "user store I/O failed: {message}",
        /// The collection could not be encoded for storage.
        Serialize { message: String } => "user store serialisation failed: {message}",
    }
}

/// Read-all/write-all storage for the user collection.
///
/// # Contract
/// - [`UserStore::read_all`] returns an empty collection when nothing has been
///   stored yet.
/// - [`UserStore::write_all`] replaces the stored collection entirely; reading
///   afterwards yields a collection equal to the one written.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full collection in stored order.
    async fn read_all(&self) -> Result<Vec<User>, UserStoreError>;

    /// Replace the stored collection.
    async fn write_all(&self, users: &[User]) -> Result<(), UserStoreError>;
}
