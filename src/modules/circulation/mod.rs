pub mod routes;

use async_trait::async_trait;
use axum::Router;
use libris_kernel::{settings::StatusPolicy, Endpoint, EndpointSet, InitCtx, Module};
use serde_json::json;

use crate::catalog::SharedCatalog;
use crate::utils::{self, schema_ref, QueryParam};

const ENDPOINTS: &[Endpoint] = &[Endpoint::IssueBook, Endpoint::ReturnBook];

const QUERY: &[QueryParam] = &[
    QueryParam {
        name: "isbn",
        required: true,
        description: "ISBN of the book",
    },
    QueryParam {
        name: "uid",
        required: false,
        description: "Member to record the transition against",
    },
];

/// Issue and return endpoints, the only writers of book status
pub struct CirculationModule {
    catalog: SharedCatalog,
    policy: StatusPolicy,
}

impl CirculationModule {
    pub fn new(catalog: SharedCatalog, policy: StatusPolicy) -> Self {
        Self { catalog, policy }
    }
}

#[async_trait]
impl Module for CirculationModule {
    fn name(&self) -> &'static str {
        "circulation"
    }

    fn endpoints(&self) -> &'static [Endpoint] {
        ENDPOINTS
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let served: Vec<&str> = ctx
            .endpoints
            .iter()
            .filter(|endpoint| ENDPOINTS.contains(endpoint))
            .map(|endpoint| endpoint.slug())
            .collect();
        tracing::info!(
            module = self.name(),
            policy = ?self.policy,
            ?served,
            "circulation module initialized"
        );
        Ok(())
    }

    fn routes(&self, enabled: &EndpointSet) -> Router {
        let state = routes::CirculationState {
            catalog: self.catalog.clone(),
            policy: self.policy,
        };
        routes::router(state, enabled)
    }

    fn openapi(&self, enabled: &EndpointSet) -> Option<serde_json::Value> {
        let tag = "Circulation";
        utils::openapi_fragment(
            enabled,
            [
                (
                    Endpoint::IssueBook,
                    utils::operation(
                        Endpoint::IssueBook,
                        tag,
                        schema_ref("Book"),
                        QUERY,
                        Some("Missing isbn, unknown book or member, or book not available"),
                    ),
                ),
                (
                    Endpoint::ReturnBook,
                    utils::operation(
                        Endpoint::ReturnBook,
                        tag,
                        schema_ref("Book"),
                        QUERY,
                        Some("Missing isbn, unknown book or member, book already available, or not held"),
                    ),
                ),
            ],
            json!({ "Book": crate::modules::books::book_schema() }),
        )
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "circulation module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "circulation module stopped");
        Ok(())
    }
}

/// Create a new instance of the circulation module
pub fn create_module(catalog: SharedCatalog, policy: StatusPolicy) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(CirculationModule::new(catalog, policy))
}
