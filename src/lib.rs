// src/lib.rs
// ============================================================================
// Module: Petstore System Tests Library
// Description: Shared configuration, schema, and fixture support for the
//              Petstore contract test suites.
// Purpose: Provide common utilities for the system-test binaries in `tests`.
// Dependencies: serde, serde_json, jsonschema, jsonwebtoken, thiserror, url
// ============================================================================

//! ## Overview
//! This crate hosts the response-shape validator, request fixtures, bearer
//! token construction, and environment-backed configuration used by the
//! Petstore system-test binaries in `tests/`.
//!
//! The service under test is remote and third-party; nothing in this crate
//! owns or resets its state. Responses are treated as untrusted input and
//! are validated before any field-level assertion.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod config;
pub mod fixtures;
pub mod schema;
