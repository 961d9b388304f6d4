use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::patch,
    Json, Router,
};
use libris_http::error::AppError;
use libris_kernel::{settings::StatusPolicy, Endpoint, EndpointSet};
use serde::Deserialize;

use crate::catalog::{circulation, Book, SharedCatalog};
use crate::modules::errors::{catalog_error, invalid_query, missing_isbn};
use crate::utils;

#[derive(Clone)]
pub struct CirculationState {
    pub catalog: SharedCatalog,
    pub policy: StatusPolicy,
}

/// Query string accepted by `/issue` and `/return`.
#[derive(Debug, Deserialize)]
pub struct CirculationQuery {
    pub isbn: Option<String>,
    /// Member to link the transition to.
    pub uid: Option<String>,
}

/// Routes for the enabled circulation endpoints.
pub fn router(state: CirculationState, enabled: &EndpointSet) -> Router {
    let prefix = utils::log_prefix("circulation");
    let mut router = Router::new();

    if enabled.contains(Endpoint::IssueBook) {
        tracing::debug!(target: "libris.routes", %prefix, path = Endpoint::IssueBook.path(), "route registered");
        router = router.route(Endpoint::IssueBook.path(), patch(issue));
    }
    if enabled.contains(Endpoint::ReturnBook) {
        tracing::debug!(target: "libris.routes", %prefix, path = Endpoint::ReturnBook.path(), "route registered");
        router = router.route(Endpoint::ReturnBook.path(), patch(give_back));
    }

    router.with_state(state)
}

/// The `isbn` to act on and the optional member, with query failures
/// reported under the configured policy.
fn parse_query(
    query: Result<Query<CirculationQuery>, QueryRejection>,
    policy: StatusPolicy,
) -> Result<(String, Option<String>), AppError> {
    let Query(query) =
        query.map_err(|rejection| invalid_query(&rejection.body_text(), policy))?;
    let isbn = query.isbn.ok_or_else(|| missing_isbn(policy))?;
    Ok((isbn, query.uid))
}

async fn issue(
    State(state): State<CirculationState>,
    query: Result<Query<CirculationQuery>, QueryRejection>,
) -> Result<Json<Book>, AppError> {
    let (isbn, uid) = parse_query(query, state.policy)?;

    let mut catalog = state.catalog.write().await;
    let result = match uid.as_deref() {
        Some(uid) => circulation::issue_book_to(&mut catalog, &isbn, uid),
        None => circulation::issue_book(&mut catalog, &isbn),
    };

    result
        .map(Json)
        .map_err(|err| catalog_error(err, state.policy))
}

async fn give_back(
    State(state): State<CirculationState>,
    query: Result<Query<CirculationQuery>, QueryRejection>,
) -> Result<Json<Book>, AppError> {
    let (isbn, uid) = parse_query(query, state.policy)?;

    let mut catalog = state.catalog.write().await;
    let result = match uid.as_deref() {
        Some(uid) => circulation::return_book_from(&mut catalog, &isbn, uid),
        None => circulation::return_book(&mut catalog, &isbn),
    };

    result
        .map(Json)
        .map_err(|err| catalog_error(err, state.policy))
}
