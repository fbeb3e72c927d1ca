// src/fixtures/mod.rs
// ============================================================================
// Module: Request Fixtures
// Description: Declarative pet payloads for the system-test scenarios.
// Purpose: Provide deterministic, reusable request bodies and mutations.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Fixtures are plain JSON values mirroring the request shapes the service
//! accepts or rejects. Tests mutate copies of the valid payload to build
//! the negative cases; nothing here persists beyond a single scenario.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod pets;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use pets::RETRIEVAL_PET_ID;
pub use pets::creation_payload;
pub use pets::creation_payload_invalid_status;
pub use pets::creation_payload_missing_name;
pub use pets::creation_payload_numeric_name;
pub use pets::creation_payload_text_id;
pub use pets::creation_payload_with_id;
pub use pets::retrieval_target;
pub use pets::with_field;
pub use pets::without_field;
