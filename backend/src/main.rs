//! Users service entry-point: loads settings, wires the JSON file store into
//! the REST endpoints and serves them.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_service::config::ServiceSettings;
use users_service::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::other(format!("invalid host {:?}: {e}", settings.host()))
    })?;
    let config = ServerConfig::new(bind_addr, settings.data_file());

    let health_state = web::Data::new(HealthState::new());
    let (server, addrs) = create_server(health_state.clone(), config)?;
    for addr in &addrs {
        info!(%addr, "users service listening");
    }

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
