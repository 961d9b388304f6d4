pub mod routes;

use async_trait::async_trait;
use axum::Router;
use libris_kernel::{Endpoint, EndpointSet, InitCtx, Module};
use serde_json::json;

use crate::catalog::SharedCatalog;
use crate::utils::{self, array_of, schema_ref};

const ENDPOINTS: &[Endpoint] = &[
    Endpoint::AllBooks,
    Endpoint::AvailableBooks,
    Endpoint::IssuedBooks,
    Endpoint::BookByIsbn,
    Endpoint::BookByTitle,
    Endpoint::BookByAuthor,
];

/// Read-only book listing and lookup endpoints
pub struct BooksModule {
    catalog: SharedCatalog,
}

impl BooksModule {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn endpoints(&self) -> &'static [Endpoint] {
        ENDPOINTS
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = self.catalog.read().await.books().len();
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = count,
            enabled = utils::enabled_count(ctx.endpoints, ENDPOINTS),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self, enabled: &EndpointSet) -> Router {
        routes::router(self.catalog.clone(), enabled)
    }

    fn openapi(&self, enabled: &EndpointSet) -> Option<serde_json::Value> {
        let tag = "Books";
        let not_found = Some("Book Not Found");
        utils::openapi_fragment(
            enabled,
            [
                (
                    Endpoint::AllBooks,
                    utils::operation(Endpoint::AllBooks, tag, array_of("Book"), &[], None),
                ),
                (
                    Endpoint::AvailableBooks,
                    utils::operation(Endpoint::AvailableBooks, tag, array_of("Book"), &[], None),
                ),
                (
                    Endpoint::IssuedBooks,
                    utils::operation(Endpoint::IssuedBooks, tag, array_of("Book"), &[], None),
                ),
                (
                    Endpoint::BookByIsbn,
                    utils::operation(Endpoint::BookByIsbn, tag, schema_ref("Book"), &[], not_found),
                ),
                (
                    Endpoint::BookByTitle,
                    utils::operation(Endpoint::BookByTitle, tag, schema_ref("Book"), &[], not_found),
                ),
                (
                    Endpoint::BookByAuthor,
                    utils::operation(Endpoint::BookByAuthor, tag, schema_ref("Book"), &[], not_found),
                ),
            ],
            json!({ "Book": book_schema() }),
        )
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

pub(crate) fn book_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "isbn": { "type": "string", "description": "Unique ISBN of the book" },
            "title": { "type": "string", "description": "Title of the book" },
            "author": { "type": "string", "description": "Author of the book" },
            "status": {
                "type": "string",
                "enum": ["available", "issued"],
                "description": "Availability of the book"
            }
        },
        "required": ["isbn", "title", "author", "status"]
    })
}

/// Create a new instance of the books module
pub fn create_module(catalog: SharedCatalog) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(catalog))
}
