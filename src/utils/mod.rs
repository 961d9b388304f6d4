//! Project-specific utilities live here.

use libris_kernel::{Endpoint, EndpointSet};
use serde_json::{json, Map, Value};

/// Formats a shared log target prefix for project logs.
pub fn log_prefix(module: &str) -> String {
    format!("libris::{module}")
}

/// How many of a module's own endpoints are enabled.
pub fn enabled_count(enabled: &EndpointSet, own: &[Endpoint]) -> usize {
    enabled.iter().filter(|endpoint| own.contains(endpoint)).count()
}

/// A query string parameter documented on an operation.
pub struct QueryParam {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Reference to a schema under `components/schemas`.
pub fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

pub fn array_of(name: &str) -> Value {
    json!({ "type": "array", "items": schema_ref(name) })
}

/// OpenAPI operation for one endpoint. `not_found` adds the 404 response.
pub fn operation(
    endpoint: Endpoint,
    tag: &str,
    success: Value,
    query: &[QueryParam],
    not_found: Option<&str>,
) -> Value {
    let mut parameters = Vec::new();
    if let Some(name) = endpoint.path_param() {
        parameters.push(json!({
            "name": name,
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        }));
    }
    for param in query {
        parameters.push(json!({
            "name": param.name,
            "in": "query",
            "required": param.required,
            "description": param.description,
            "schema": { "type": "string" }
        }));
    }

    let mut responses = Map::new();
    responses.insert(
        "200".to_string(),
        json!({
            "description": "OK",
            "content": { "application/json": { "schema": success } }
        }),
    );
    if let Some(description) = not_found {
        responses.insert(
            "404".to_string(),
            json!({
                "description": description,
                "content": {
                    "application/json": { "schema": schema_ref("ErrorResponse") }
                }
            }),
        );
    }

    json!({
        "summary": endpoint.summary(),
        "operationId": endpoint.slug(),
        "tags": [tag],
        "parameters": parameters,
        "responses": responses
    })
}

/// Assemble a module fragment from the operations of its enabled endpoints.
/// Returns `None` when none of them are enabled.
pub fn openapi_fragment(
    enabled: &EndpointSet,
    operations: impl IntoIterator<Item = (Endpoint, Value)>,
    schemas: Value,
) -> Option<Value> {
    let mut paths = Map::new();
    for (endpoint, op) in operations {
        if !enabled.contains(endpoint) {
            continue;
        }
        let item = paths
            .entry(endpoint.path().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(methods) = item {
            methods.insert(endpoint.method().as_str().to_string(), op);
        }
    }

    if paths.is_empty() {
        return None;
    }

    Some(json!({
        "paths": paths,
        "components": { "schemas": schemas }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_documents_path_and_query_parameters() {
        let op = operation(
            Endpoint::BookByIsbn,
            "Books",
            schema_ref("Book"),
            &[],
            Some("Book Not Found"),
        );
        assert_eq!(op["parameters"][0]["name"], "isbn");
        assert_eq!(op["parameters"][0]["in"], "path");
        assert_eq!(op["responses"]["200"]["content"]["application/json"]["schema"]["$ref"], "#/components/schemas/Book");
        assert!(op["responses"]["404"].is_object());

        let op = operation(
            Endpoint::IssueBook,
            "Circulation",
            schema_ref("Book"),
            &[QueryParam {
                name: "isbn",
                required: true,
                description: "ISBN of the book",
            }],
            None,
        );
        assert_eq!(op["parameters"][0]["in"], "query");
        assert!(op["responses"].get("404").is_none());
    }

    #[test]
    fn fragment_only_lists_enabled_endpoints() {
        let enabled = EndpointSet::single(Endpoint::AllBooks);
        let fragment = openapi_fragment(
            &enabled,
            [
                (Endpoint::AllBooks, json!({ "summary": "all" })),
                (Endpoint::IssuedBooks, json!({ "summary": "issued" })),
            ],
            json!({}),
        )
        .unwrap();

        assert_eq!(fragment["paths"]["/books"]["get"]["summary"], "all");
        assert!(fragment["paths"].get("/issued-books").is_none());

        let none = openapi_fragment(
            &enabled,
            [(Endpoint::IssueBook, json!({}))],
            json!({}),
        );
        assert!(none.is_none());
    }

    #[test]
    fn enabled_count_ignores_other_modules() {
        let enabled = EndpointSet::new([Endpoint::AllBooks, Endpoint::IssueBook]).unwrap();
        assert_eq!(
            enabled_count(&enabled, &[Endpoint::AllBooks, Endpoint::BookByIsbn]),
            1
        );
        assert_eq!(enabled_count(&enabled, &[Endpoint::AllMembers]), 0);
    }

    #[test]
    fn log_prefix_is_namespaced() {
        assert_eq!(log_prefix("books"), "libris::books");
    }
}
