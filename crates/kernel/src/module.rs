use async_trait::async_trait;
use axum::Router;

use crate::endpoint::{Endpoint, EndpointSet};

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub endpoints: &'a EndpointSet,
}

/// Core module trait that all Libris modules must implement
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Endpoints this module knows how to serve
    fn endpoints(&self) -> &'static [Endpoint];

    /// Initialize the module with the provided context
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for the enabled subset of this module's endpoints.
    /// Routes are merged at the server root.
    fn routes(&self, _enabled: &EndpointSet) -> Router {
        Router::new()
    }

    /// Return an OpenAPI fragment (`paths` and `components`) for the enabled endpoints
    fn openapi(&self, _enabled: &EndpointSet) -> Option<serde_json::Value> {
        None
    }

    /// Called once the module is initialized and before the server accepts requests
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources
    /// Called during application shutdown
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
