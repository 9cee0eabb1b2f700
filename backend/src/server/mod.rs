//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use users_service::Trace;
#[cfg(debug_assertions)]
use users_service::doc::ApiDoc;
use users_service::inbound::http::health::{HealthState, live, ready};
use users_service::inbound::http::state::HttpState;
use users_service::inbound::http::users;
use users_service::outbound::persistence::JsonFileUserStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Opens the JSON file store, wires it into the users service and binds the
/// listener. Readiness is marked once the socket is bound.
///
/// # Returns
/// The running [`Server`] together with the addresses it bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the data directory cannot be opened or
/// the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let ServerConfig {
        bind_addr,
        data_file,
    } = config;

    let store = JsonFileUserStore::open(&data_file).map_err(std::io::Error::other)?;
    info!(path = %store.path().display(), "using users data file");
    let http_state = web::Data::new(HttpState::from_store(Arc::new(store)));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?;
    let addrs = server.addrs();
    let server = server.run();

    health_state.mark_ready();
    Ok((server, addrs))
}
