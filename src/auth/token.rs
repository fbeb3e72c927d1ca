// src/auth/token.rs
// ============================================================================
// Module: Bearer Token
// Description: HS256 token signing for delete-request headers.
// Purpose: Produce the username-claim token attached to DELETE calls.
// Dependencies: jsonwebtoken, serde, thiserror
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures raised while signing the bearer token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing operation itself failed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

// ============================================================================
// SECTION: Claims
// ============================================================================

/// Claims carried by the test bearer token.
#[derive(Debug, Serialize)]
struct TokenClaims {
    /// Arbitrary username claim; not validated server-side.
    username: &'static str,
}

// ============================================================================
// SECTION: Signing
// ============================================================================

/// Signs an HS256 bearer token carrying a fixed username claim.
///
/// The secret is the base URL of the service under test, matching the
/// request shape the delete scenarios were recorded with.
///
/// # Errors
///
/// Returns [`TokenError::Signing`] when encoding fails.
pub fn fake_bearer_token(secret: &str) -> Result<String, TokenError> {
    let claims = TokenClaims {
        username: "test_user",
    };
    let header = Header::new(Algorithm::HS256);
    jsonwebtoken::encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|err| TokenError::Signing(err.to_string()))
}
