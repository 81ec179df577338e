//! Server construction and route wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use address_lookup::inbound::http::address::lookup_address;
use address_lookup::inbound::http::health::{HealthState, live, ready};
use address_lookup::inbound::http::state::HttpState;

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
    let api = web::scope("/api/v1").service(lookup_address);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(lookup_address)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The address lookup pipeline (and its cache) is built once and shared by
/// every worker. Readiness reports serving only after both the pipeline and
/// the listener exist.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the HTTP client, binding the
/// socket, or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(config)?;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_serving();
    Ok(server)
}

/// Wait for `shutdown`, then fail the health endpoints and stop the server
/// gracefully so in-flight lookups can finish.
pub async fn drain_when<F>(shutdown: F, health: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = shutdown.await {
        warn!(%error, "shutdown signal listener failed; draining now");
    }
    health.mark_draining();
    info!("draining address lookup service");
    handle.stop(true).await;
}
