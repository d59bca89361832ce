//! Builders for the OpenAPI fragments rule tests feed to the lint
//! functions.

use serde_json::{json, Map, Value};

/// The canonical SemVer pattern ApiInfo schemas declare on `version`.
const SEMVER_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

/// A response carrying `application/problem+json` content with one example.
#[must_use]
pub fn problem_response() -> Value {
    json!({
        "content": {
            "application/problem+json": {
                "examples": {"example1": {}}
            }
        }
    })
}

/// An operation whose listed status codes each have a valid Problem
/// Details response.
#[must_use]
pub fn operation_with_problem_responses(codes: &[&str]) -> Value {
    let mut responses = Map::new();
    for code in codes {
        responses.insert((*code).to_string(), problem_response());
    }
    json!({ "responses": responses })
}

/// A JSON Schema describing the Problem Details envelope.
#[must_use]
pub fn problem_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "type": {"type": "string", "format": "uri-reference"},
            "title": {"type": "string"},
            "status": {"type": "integer", "format": "int32"},
            "detail": {"type": "string"},
            "instance": {"type": "string"}
        }
    })
}

/// A JSON Schema describing the ApiInfo envelope.
#[must_use]
pub fn api_info_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "version": {"type": "string", "pattern": SEMVER_PATTERN},
            "status": {
                "type": "string",
                "x-extensible-enum": ["ALPHA", "BETA", "LIVE", "DEPRECATED"]
            },
            "releaseDate": {"type": "string", "format": "date"},
            "documentation": {"type": "string", "format": "uri"},
            "releaseNotes": {"type": "string", "format": "uri"}
        }
    })
}
