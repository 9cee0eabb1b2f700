//! Domain primitives, ports, and the users service.
//!
//! Purpose: keep the user model, its validation schema, and the CRUD
//! use-cases independent of HTTP and of the storage medium.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - User / UserId / UserDraft / RequestedId: the user resource.
//! - validation: the static create/update schema.
//! - UsersService: CRUD over an injected [`ports::UserStore`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;
pub mod validation;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{RequestedId, User, UserDraft, UserId};
pub use self::users_service::{USER_NOT_FOUND, UsersService};
