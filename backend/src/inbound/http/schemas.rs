//! OpenAPI schema definitions for the users API.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror the JSON shape of their domain counterparts and exist only
//! for documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
///
/// Stored user. Fields supplied at creation beyond the ones listed here are
/// returned as additional properties.
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Identifier assigned at creation (collection length + 1).
    #[schema(example = 1)]
    id: u64,
    /// Given name.
    #[schema(example = "Ada", min_length = 1)]
    first_name: String,
    /// Family name.
    #[schema(example = "Lovelace", min_length = 1)]
    second_name: String,
    /// Age, inclusive range 0..=150.
    #[schema(example = 36, minimum = 0, maximum = 150)]
    age: f64,
    /// Optional city.
    #[schema(example = "London", min_length = 1)]
    city: Option<String>,
}

/// OpenAPI schema for create/update request bodies.
#[derive(ToSchema)]
#[schema(as = UserPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPayloadSchema {
    /// Given name.
    #[schema(example = "Ada", min_length = 1)]
    first_name: String,
    /// Family name.
    #[schema(example = "Lovelace", min_length = 1)]
    second_name: String,
    /// Age, inclusive range 0..=150.
    #[schema(example = 36, minimum = 0, maximum = 150)]
    age: f64,
    /// Optional city.
    #[schema(example = "London", min_length = 1)]
    city: Option<String>,
}
