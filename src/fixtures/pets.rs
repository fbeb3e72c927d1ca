// src/fixtures/pets.rs
// ============================================================================
// Module: Pet Payload Fixtures
// Description: Request payload builders for pet scenarios.
// Purpose: Keep scenario inputs declarative and centralized.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Payload builders for the pet scenarios. The valid creation payload is the
//! baseline; invalid variants differ from it in exactly one field so each
//! scenario exercises a single service-side validation rule.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Pet id expected to exist on the remote service for retrieval scenarios.
pub const RETRIEVAL_PET_ID: i64 = 1;

/// Expected values for the retrieval scenario. Only stable fields carry
/// meaningful values; the live record's name and status churn constantly.
#[must_use]
pub fn retrieval_target() -> Value {
    json!({
        "id": RETRIEVAL_PET_ID,
        "category": { "id": 1, "name": "" },
        "name": "",
        "photoUrls": [],
        "tags": [],
        "status": ""
    })
}

/// Valid creation payload with the baseline pet id.
#[must_use]
pub fn creation_payload() -> Value {
    creation_payload_with_id(101)
}

/// Valid creation payload using a caller-chosen pet id.
///
/// Scenarios that create pets pick distinct ids so suites stay isolated
/// when the runner executes them concurrently.
#[must_use]
pub fn creation_payload_with_id(id: i64) -> Value {
    json!({
        "id": id,
        "category": { "id": 1, "name": "cat" },
        "name": "boy",
        "photoUrls": ["path/to/photo"],
        "tags": [{ "id": 506, "name": "good" }],
        "status": "sold"
    })
}

/// Creation payload lacking the mandatory `name` field.
#[must_use]
pub fn creation_payload_missing_name(id: i64) -> Value {
    without_field(creation_payload_with_id(id), "name")
}

/// Creation payload carrying a status the service does not recognize.
#[must_use]
pub fn creation_payload_invalid_status(id: i64) -> Value {
    with_field(creation_payload_with_id(id), "status", json!("vendido"))
}

/// Creation payload whose id is text instead of an integer.
#[must_use]
pub fn creation_payload_text_id() -> Value {
    with_field(creation_payload_with_id(101), "id", json!("101"))
}

/// Creation payload whose name is numeric instead of text.
#[must_use]
pub fn creation_payload_numeric_name(id: i64) -> Value {
    with_field(creation_payload_with_id(id), "name", json!(13))
}

// ============================================================================
// SECTION: Mutations
// ============================================================================

/// Returns the payload with the named top-level field removed.
#[must_use]
pub fn without_field(mut payload: Value, field: &str) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}

/// Returns the payload with the named top-level field replaced.
#[must_use]
pub fn with_field(mut payload: Value, field: &str, value: Value) -> Value {
    if let Some(object) = payload.as_object_mut() {
        object.insert(field.to_string(), value);
    }
    payload
}
