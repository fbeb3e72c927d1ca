// src/auth/mod.rs
// ============================================================================
// Module: Request Auth
// Description: Bearer-token construction for delete requests.
// Purpose: Mirror the request shape the service expects on DELETE.
// Dependencies: jsonwebtoken, serde, thiserror
// ============================================================================

//! ## Overview
//! Delete requests carry a locally signed bearer token with a username
//! claim. The observed service does not validate the token; it is attached
//! to mirror the expected request shape.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod token;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use token::TokenError;
pub use token::fake_bearer_token;
