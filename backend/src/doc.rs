//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{UserPayloadSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users service API",
        description = "CRUD interface over a JSON-file backed user collection."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserPayloadSchema)),
    tags(
        (name = "users", description = "Operations on stored users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
