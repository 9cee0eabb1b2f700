//! User store adapters.
//!
//! Both adapters implement [`crate::domain::ports::UserStore`] with the same
//! whole-collection contract:
//!
//! - [`JsonFileUserStore`] keeps the collection in a single pretty-printed
//!   JSON file, read and overwritten in full on every call.
//! - [`InMemoryUserStore`] keeps it in process memory for tests and
//!   embedding.

mod in_memory_user_store;
mod json_file_user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use json_file_user_store::JsonFileUserStore;
