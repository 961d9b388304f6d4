use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use libris_http::error::AppError;
use libris_kernel::{Endpoint, EndpointSet};

use super::models::{BorrowHistory, CurrentBook};
use crate::catalog::{lookup, Catalog, CatalogResult, Member, SharedCatalog};
use crate::utils;

/// Routes for the enabled member endpoints.
pub fn router(catalog: SharedCatalog, enabled: &EndpointSet) -> Router {
    let prefix = utils::log_prefix("members");
    let mut router = Router::new();

    for endpoint in super::ENDPOINTS.iter().copied() {
        if !enabled.contains(endpoint) {
            continue;
        }
        let method_router = match endpoint {
            Endpoint::AllMembers => get(list_members),
            Endpoint::MemberByUid => get(get_member_by_uid),
            Endpoint::MemberByName => get(get_member_by_name),
            Endpoint::MemberByContactNum => get(get_member_by_contact_num),
            Endpoint::MemberCurrentBook => get(get_current_book),
            Endpoint::MemberHistory => get(get_history),
            _ => continue,
        };
        tracing::debug!(target: "libris.routes", %prefix, %endpoint, path = endpoint.path(), "route registered");
        router = router.route(endpoint.path(), method_router);
    }

    router.with_state(catalog)
}

async fn list_members(State(catalog): State<SharedCatalog>) -> Json<Vec<Member>> {
    let catalog = catalog.read().await;
    Json(catalog.members().to_vec())
}

/// Run a member lookup under the read lock and project the match.
async fn find<T>(
    catalog: &SharedCatalog,
    key: &str,
    lookup: for<'a> fn(&'a Catalog, &str) -> CatalogResult<&'a Member>,
    project: fn(&Member) -> T,
) -> Result<Json<T>, AppError> {
    let catalog = catalog.read().await;
    let member = lookup(&catalog, key)?;
    Ok(Json(project(member)))
}

async fn get_member_by_uid(
    State(catalog): State<SharedCatalog>,
    Path(uid): Path<String>,
) -> Result<Json<Member>, AppError> {
    find(&catalog, &uid, lookup::member_by_uid, Member::clone).await
}

async fn get_member_by_name(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
) -> Result<Json<Member>, AppError> {
    find(&catalog, &name, lookup::member_by_name, Member::clone).await
}

async fn get_member_by_contact_num(
    State(catalog): State<SharedCatalog>,
    Path(contact_num): Path<String>,
) -> Result<Json<Member>, AppError> {
    find(&catalog, &contact_num, lookup::member_by_contact_num, Member::clone).await
}

async fn get_current_book(
    State(catalog): State<SharedCatalog>,
    Path(uid): Path<String>,
) -> Result<Json<CurrentBook>, AppError> {
    find(&catalog, &uid, lookup::member_by_uid, |member| {
        CurrentBook::from(member)
    })
    .await
}

async fn get_history(
    State(catalog): State<SharedCatalog>,
    Path(uid): Path<String>,
) -> Result<Json<BorrowHistory>, AppError> {
    find(&catalog, &uid, lookup::member_by_uid, |member| {
        BorrowHistory::from(member)
    })
    .await
}
