use anyhow::Context;
use libris_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Libris settings")?;
    libris_telemetry::init(&settings.telemetry)?;

    let endpoints = settings.catalog.endpoint_set()?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.address(),
        endpoints = endpoints.len(),
        "libris-app bootstrap starting"
    );

    libris_app::serve(&settings, &endpoints).await
}
