//! Users service library.
//!
//! A small CRUD service for user records persisted as a single JSON file.
//! The crate follows a hexagonal layout: [`domain`] holds the model,
//! validation and the users service behind ports, [`outbound`] provides the
//! file-backed store, and [`inbound`] exposes the HTTP adapter.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
