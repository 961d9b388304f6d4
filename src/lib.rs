//! Libris application library
//!
//! The in-memory catalog, the HTTP modules that expose it, and the glue
//! that runs them on one server.

pub mod catalog;
pub mod modules;
pub mod utils;

use anyhow::Context;
use libris_kernel::{settings::Settings, EndpointSet, InitCtx};

use catalog::Catalog;

/// Seed a catalog, bring up every module, and serve the enabled endpoints
/// until shutdown.
pub async fn serve(settings: &Settings, endpoints: &EndpointSet) -> anyhow::Result<()> {
    let catalog = Catalog::seeded().into_shared();
    let registry = modules::registry(&catalog, settings);
    let ctx = InitCtx {
        settings,
        endpoints,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module startup failed")?;

    let served = libris_http::start_server(&registry, settings, endpoints).await;

    registry
        .stop_modules()
        .await
        .context("module shutdown failed")?;
    served
}
