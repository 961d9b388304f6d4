//! Mapping from catalog failures to HTTP errors.

use libris_http::error::AppError;
use libris_kernel::settings::StatusPolicy;

use crate::catalog::{BookStatus, CatalogError, Entity};

pub const BOOK_NOT_FOUND: &str = "Book Not Found";
pub const MEMBER_NOT_FOUND: &str = "Member Not Found";
pub const MISSING_ISBN: &str = "Missing isbn query parameter";
pub const BOOK_NOT_AVAILABLE: &str = "Book Not available";
pub const BOOK_ALREADY_AVAILABLE: &str = "Book already available";
pub const BOOK_NOT_HELD: &str = "Book not held by member";
pub const MEMBER_HOLDS_BOOK: &str = "Member already holds a book";
pub const INVALID_QUERY: &str = "Invalid query string";

/// Translate a catalog failure under the configured status policy.
pub fn catalog_error(err: CatalogError, policy: StatusPolicy) -> AppError {
    tracing::debug!(error = %err, ?policy, "catalog operation rejected");

    match err {
        CatalogError::NotFound {
            entity: Entity::Book,
            ..
        } => AppError::not_found(BOOK_NOT_FOUND),
        CatalogError::NotFound {
            entity: Entity::Member,
            ..
        } => AppError::not_found(MEMBER_NOT_FOUND),
        CatalogError::InvalidTransition { status, .. } => {
            let message = match status {
                BookStatus::Issued => BOOK_NOT_AVAILABLE,
                BookStatus::Available => BOOK_ALREADY_AVAILABLE,
            };
            rejected(message, "invalid_transition", policy)
        }
        CatalogError::NotHeld { .. } => rejected(BOOK_NOT_HELD, "not_held", policy),
        CatalogError::AlreadyHolding { .. } => {
            rejected(MEMBER_HOLDS_BOOK, "already_holding", policy)
        }
        CatalogError::DuplicateKey { entity, key } => {
            AppError::conflict(format!("duplicate {entity} key {key}"), "duplicate_key")
        }
    }
}

/// Error for a request that did not carry the `isbn` query parameter.
pub fn missing_isbn(policy: StatusPolicy) -> AppError {
    match policy {
        StatusPolicy::Legacy => AppError::not_found_with_code(MISSING_ISBN, "missing_parameter"),
        StatusPolicy::Strict => AppError::bad_request(MISSING_ISBN),
    }
}

/// Error for a query string that could not be decoded, e.g. a repeated key.
pub fn invalid_query(detail: &str, policy: StatusPolicy) -> AppError {
    tracing::debug!(detail, ?policy, "query string rejected");
    match policy {
        StatusPolicy::Legacy => AppError::not_found_with_code(INVALID_QUERY, "invalid_query"),
        StatusPolicy::Strict => AppError::bad_request(INVALID_QUERY),
    }
}

fn rejected(message: &str, code: &str, policy: StatusPolicy) -> AppError {
    match policy {
        StatusPolicy::Legacy => AppError::not_found_with_code(message, code),
        StatusPolicy::Strict => AppError::conflict(message, code),
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        catalog_error(err, StatusPolicy::Legacy)
    }
}
