use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use libris_http::error::AppError;
use libris_kernel::{Endpoint, EndpointSet};

use crate::catalog::{filter, lookup, Book, Catalog, CatalogResult, SharedCatalog};
use crate::utils;

/// Routes for the enabled book endpoints.
pub fn router(catalog: SharedCatalog, enabled: &EndpointSet) -> Router {
    let prefix = utils::log_prefix("books");
    let mut router = Router::new();

    for endpoint in super::ENDPOINTS.iter().copied() {
        if !enabled.contains(endpoint) {
            continue;
        }
        let method_router = match endpoint {
            Endpoint::AllBooks => get(list_books),
            Endpoint::AvailableBooks => get(list_available_books),
            Endpoint::IssuedBooks => get(list_issued_books),
            Endpoint::BookByIsbn => get(get_book_by_isbn),
            Endpoint::BookByTitle => get(get_book_by_title),
            Endpoint::BookByAuthor => get(get_book_by_author),
            _ => continue,
        };
        tracing::debug!(target: "libris.routes", %prefix, %endpoint, path = endpoint.path(), "route registered");
        router = router.route(endpoint.path(), method_router);
    }

    router.with_state(catalog)
}

async fn list_books(State(catalog): State<SharedCatalog>) -> Json<Vec<Book>> {
    let catalog = catalog.read().await;
    Json(catalog.books().to_vec())
}

async fn list_available_books(State(catalog): State<SharedCatalog>) -> Json<Vec<Book>> {
    let catalog = catalog.read().await;
    Json(filter::available_books(&catalog).cloned().collect())
}

async fn list_issued_books(State(catalog): State<SharedCatalog>) -> Json<Vec<Book>> {
    let catalog = catalog.read().await;
    Json(filter::issued_books(&catalog).cloned().collect())
}

async fn find(
    catalog: &SharedCatalog,
    key: &str,
    lookup: for<'a> fn(&'a Catalog, &str) -> CatalogResult<&'a Book>,
) -> Result<Json<Book>, AppError> {
    let catalog = catalog.read().await;
    let book = lookup(&catalog, key)?;
    Ok(Json(book.clone()))
}

async fn get_book_by_isbn(
    State(catalog): State<SharedCatalog>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, AppError> {
    find(&catalog, &isbn, lookup::book_by_isbn).await
}

async fn get_book_by_title(
    State(catalog): State<SharedCatalog>,
    Path(title): Path<String>,
) -> Result<Json<Book>, AppError> {
    find(&catalog, &title, lookup::book_by_title).await
}

async fn get_book_by_author(
    State(catalog): State<SharedCatalog>,
    Path(author): Path<String>,
) -> Result<Json<Book>, AppError> {
    find(&catalog, &author, lookup::book_by_author).await
}
