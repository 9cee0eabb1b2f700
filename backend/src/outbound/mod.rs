//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: user store adapters (JSON file on local disk, and an
//!   in-memory substitute).
//!
//! Adapters are thin translators between domain types and the storage
//! representation. They contain no business logic.

pub mod persistence;
