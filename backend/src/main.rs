//! Service entry-point: loads settings, initialises tracing, and serves the
//! address lookup and health endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use address_lookup::inbound::http::health::HealthState;
use address_lookup::settings::AddressLookupSettings;
use server::{ServerConfig, create_server, drain_when};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = AddressLookupSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level()));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_settings(&settings)
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(
        bind_addr = %config.bind_addr(),
        cache_capacity = config.cache_capacity,
        timeout_ms = settings.http_timeout_ms,
        retry_attempts = settings.http_retry_attempts,
        "starting address lookup service"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &config)?;
    let drain = drain_when(tokio::signal::ctrl_c(), health_state, server.handle());
    actix_web::rt::spawn(drain);
    server.await
}
