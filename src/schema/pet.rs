// src/schema/pet.rs
// ============================================================================
// Module: Pet Response Records
// Description: Typed pet resource records and schema validation.
// Purpose: Parse decoded JSON responses into typed records, failing closed.
// Dependencies: serde, serde_json, jsonschema, thiserror
// ============================================================================

//! ## Overview
//! Records mirror the pet resource shape returned by the service: a pet with
//! nested category and tags, plus the error envelope used on failure paths.
//! Parsing is pure; no network or filesystem access happens here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Validation failures raised while checking a decoded response body.
///
/// Transport failures surface as `reqwest` errors in the test helpers;
/// every variant here means the body arrived but did not match the
/// expected contract shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The decoded value could not be parsed into the typed record.
    #[error("response shape mismatch: {0}")]
    Shape(String),
    /// The embedded JSON Schema document failed to compile.
    #[error("schema compilation failed: {0}")]
    Compile(String),
    /// The instance violated the compiled JSON Schema.
    #[error("schema validation failed: {0}")]
    Validation(String),
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Category nested under a pet resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: i64,
    /// Category display name.
    pub name: String,
}

/// Tag nested under a pet resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: i64,
    /// Tag display name.
    pub name: String,
}

/// Pet resource as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Whole-number pet identifier.
    pub id: i64,
    /// Required nested category.
    pub category: Category,
    /// Required pet name.
    pub name: String,
    /// Ordered photo URL list; may be empty.
    #[serde(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    /// Ordered tag list; may be empty.
    pub tags: Vec<Tag>,
    /// Status text; the service rejects unrecognized values on write.
    pub status: String,
}

/// Error envelope returned by the service on failure paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Service error code.
    pub code: i64,
    /// Error classification, for example `error`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message, for example `Pet not found`.
    pub message: String,
}

impl Pet {
    /// Parses a decoded JSON value into a typed pet record.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Shape`] when a required field is missing or a
    /// value cannot be coerced to its declared type.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(|err| SchemaError::Shape(err.to_string()))
    }
}

impl ErrorResponse {
    /// Parses a decoded JSON value into a typed error envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Shape`] when the envelope fields are missing
    /// or mistyped.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(|err| SchemaError::Shape(err.to_string()))
    }
}

// ============================================================================
// SECTION: JSON Schema
// ============================================================================

/// Returns the JSON Schema document for the pet resource.
#[must_use]
pub fn pet_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "https://petstore.swagger.io/v2/schemas/pet.json",
        "type": "object",
        "required": ["id", "category", "name", "photoUrls", "tags", "status"],
        "properties": {
            "id": { "type": "integer" },
            "category": { "$ref": "#/$defs/category" },
            "name": { "type": "string" },
            "photoUrls": {
                "type": "array",
                "items": { "type": "string" }
            },
            "tags": {
                "type": "array",
                "items": { "$ref": "#/$defs/tag" }
            },
            "status": { "type": "string" }
        },
        "$defs": {
            "category": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" }
                }
            },
            "tag": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" }
                }
            }
        }
    })
}

/// Compiles the pet schema into a reusable validator.
///
/// # Errors
///
/// Returns [`SchemaError::Compile`] when the embedded document is not a
/// valid draft 2020-12 schema.
pub fn pet_validator() -> Result<Validator, SchemaError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&pet_schema())
        .map_err(|err| SchemaError::Compile(err.to_string()))
}

/// Validates an instance against the pet schema.
///
/// # Errors
///
/// Returns [`SchemaError::Validation`] listing every violated constraint,
/// or [`SchemaError::Compile`] when the schema itself fails to build.
pub fn validate_pet(instance: &Value) -> Result<(), SchemaError> {
    let validator = pet_validator()?;
    let messages: Vec<String> =
        validator.iter_errors(instance).map(|err| err.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Validation(messages.join("; ")))
    }
}
