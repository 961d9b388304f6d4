pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use libris_kernel::{Endpoint, EndpointSet, InitCtx, Module};
use serde_json::json;

use crate::catalog::SharedCatalog;
use crate::utils::{self, array_of, schema_ref};

const ENDPOINTS: &[Endpoint] = &[
    Endpoint::AllMembers,
    Endpoint::MemberByUid,
    Endpoint::MemberByName,
    Endpoint::MemberByContactNum,
    Endpoint::MemberCurrentBook,
    Endpoint::MemberHistory,
];

/// Member listing and lookup endpoints
pub struct MembersModule {
    catalog: SharedCatalog,
}

impl MembersModule {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Module for MembersModule {
    fn name(&self) -> &'static str {
        "members"
    }

    fn endpoints(&self) -> &'static [Endpoint] {
        ENDPOINTS
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = self.catalog.read().await.members().len();
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            members = count,
            enabled = utils::enabled_count(ctx.endpoints, ENDPOINTS),
            "members module initialized"
        );
        Ok(())
    }

    fn routes(&self, enabled: &EndpointSet) -> Router {
        routes::router(self.catalog.clone(), enabled)
    }

    fn openapi(&self, enabled: &EndpointSet) -> Option<serde_json::Value> {
        let tag = "Members";
        let not_found = Some("Member Not Found");
        let lookup = |endpoint: Endpoint, schema: &str| {
            (
                endpoint,
                utils::operation(endpoint, tag, schema_ref(schema), &[], not_found),
            )
        };

        utils::openapi_fragment(
            enabled,
            [
                (
                    Endpoint::AllMembers,
                    utils::operation(Endpoint::AllMembers, tag, array_of("Member"), &[], None),
                ),
                lookup(Endpoint::MemberByUid, "Member"),
                lookup(Endpoint::MemberByName, "Member"),
                lookup(Endpoint::MemberByContactNum, "Member"),
                lookup(Endpoint::MemberCurrentBook, "CurrentBook"),
                lookup(Endpoint::MemberHistory, "BorrowHistory"),
            ],
            json!({
                "Member": {
                    "type": "object",
                    "properties": {
                        "uid": { "type": "string", "description": "Unique member identifier" },
                        "name": { "type": "string" },
                        "datejoined": { "type": "string", "description": "Date token recorded at registration" },
                        "contactnum": { "type": "string" },
                        "status": { "type": "string", "description": "Currently held book, or NONE" },
                        "history": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Previously held books, oldest first"
                        }
                    },
                    "required": ["uid", "name", "datejoined", "contactnum", "status", "history"]
                },
                "CurrentBook": {
                    "type": "object",
                    "properties": {
                        "uid": { "type": "string" },
                        "status": { "type": "string" }
                    },
                    "required": ["uid", "status"]
                },
                "BorrowHistory": {
                    "type": "object",
                    "properties": {
                        "uid": { "type": "string" },
                        "history": { "type": "array", "items": { "type": "string" } },
                        "total": { "type": "integer", "minimum": 0 }
                    },
                    "required": ["uid", "history", "total"]
                }
            }),
        )
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "members module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "members module stopped");
        Ok(())
    }
}

/// Create a new instance of the members module
pub fn create_module(catalog: SharedCatalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(MembersModule::new(catalog))
}
