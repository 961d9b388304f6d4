//! HTTP server facade for Libris with Axum, error handling, and OpenAPI support.

use anyhow::Context;
use axum::{routing::get, Router};

use libris_kernel::{settings::Settings, EndpointSet, ModuleRegistry};

pub mod error;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server for the enabled endpoints and serve until the
/// process is interrupted.
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &Settings,
    enabled: &EndpointSet,
) -> anyhow::Result<()> {
    let address = settings.server.address();
    tracing::info!("starting HTTP server on {}", address);

    let app = build_router(registry, settings, enabled).context("failed to build HTTP router")?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;

    for endpoint in enabled.iter() {
        tracing::info!(
            endpoint = %endpoint,
            "serving {} http://{}{}",
            endpoint.method().as_str().to_uppercase(),
            address,
            endpoint.path()
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with the routes of every enabled endpoint
pub fn build_router(
    registry: &ModuleRegistry,
    settings: &Settings,
    enabled: &EndpointSet,
) -> anyhow::Result<Router> {
    registry.ensure_served(enabled)?;

    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        let served = module
            .endpoints()
            .iter()
            .filter(|endpoint| enabled.contains(**endpoint))
            .count();
        if served == 0 {
            tracing::debug!(module = module.name(), "no enabled endpoints, skipping");
            continue;
        }

        tracing::info!(module = module.name(), served, "mounting module routes");
        router_builder = router_builder.mount_module(module.name(), module.routes(enabled));
    }

    router_builder = router_builder
        .with_openapi(registry, enabled)
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms);

    Ok(router_builder.build())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
