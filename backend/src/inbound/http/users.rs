//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users      {"firstName":"Ada","secondName":"Lovelace","age":36}
//! PUT    /users/{id} {"firstName":"Ada","secondName":"King","age":37,"city":"London"}
//! DELETE /users/{id}
//! ```
//!
//! Handlers are thin: they parse the path identifier, hand the raw JSON body
//! to the driving ports, and pick the success status. Failures render via
//! [`crate::inbound::http::error`].

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{RequestedId, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::JsonBody;
use crate::inbound::http::schemas::{UserPayloadSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// List every stored user in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch a single user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Numeric user identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = RequestedId::parse(&path.into_inner());
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user from the request body.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayloadSchema,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Validation failure", body = String, content_type = "text/plain"),
        (status = 413, description = "Body larger than 100 KiB")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonBody,
) -> ApiResult<HttpResponse> {
    let user = state.user_commands.create_user(&payload).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Replace the schema fields of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Numeric user identifier")),
    request_body = UserPayloadSchema,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 400, description = "Validation failure", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody,
) -> ApiResult<web::Json<User>> {
    let id = RequestedId::parse(&path.into_inner());
    let user = state.user_commands.update_user(id, &payload).await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Numeric user identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = RequestedId::parse(&path.into_inner());
    state.user_commands.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the users routes on a service config.
///
/// Also installs the body size limit used by [`JsonBody`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(JsonBody::config())
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
