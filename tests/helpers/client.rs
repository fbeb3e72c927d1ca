// tests/helpers/client.rs
// ============================================================================
// Module: Petstore HTTP Client
// Description: HTTP client for the pet endpoints with transcript capture.
// Purpose: Issue GET/POST/PUT/DELETE against the service under test.
// Dependencies: reqwest, serde, serde_json, petstore-system-tests
// ============================================================================

//! ## Overview
//! HTTP client for the Petstore endpoints with transcript capture.
//! Invariants:
//! - Requests carry the client timeout; a hung request is the HTTP
//!   library's responsibility.
//! - No retries: transport failures propagate to the scenario unchanged.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use petstore_system_tests::auth::fake_bearer_token;
use petstore_system_tests::config::SystemTestConfig;
use reqwest::Client;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;

use super::timeouts;

/// Default per-request timeout before env overrides apply.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One captured request/response exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Monotonic sequence number within one client.
    pub sequence: u64,
    /// HTTP method.
    pub method: String,
    /// Path relative to the base URL.
    pub path: String,
    /// Request body, when one was sent.
    pub request: Option<Value>,
    /// Response status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct ApiExchange {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl ApiExchange {
    /// Decodes the body as JSON.
    ///
    /// A non-JSON body on a path that promised one is a hard failure,
    /// reported distinctly from any later field-level mismatch.
    pub fn json(&self) -> Result<Value, String> {
        serde_json::from_str(&self.body)
            .map_err(|err| format!("response body is not valid JSON: {err}: {}", self.body))
    }
}

/// Petstore HTTP client with transcript capture.
#[derive(Clone)]
pub struct PetStoreClient {
    base_url: String,
    client: Client,
    bearer_token: String,
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl PetStoreClient {
    /// Creates a client from environment configuration.
    pub fn from_env() -> Result<Self, String> {
        let config = SystemTestConfig::load()?;
        let base_url = config.resolve_base_url();
        let timeout = timeouts::resolve_timeout(config.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        let bearer_token =
            fake_bearer_token(&base_url).map_err(|err| format!("failed to sign token: {err}"))?;
        Ok(Self {
            base_url,
            client,
            bearer_token,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the captured transcript.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map(|entries| entries.clone()).unwrap_or_default()
    }

    /// GET /pet/{id} for a well-typed pet id.
    pub async fn fetch_pet(&self, pet_id: i64) -> Result<ApiExchange, String> {
        self.fetch_pet_raw(&pet_id.to_string()).await
    }

    /// GET /pet/{segment} with an arbitrary path segment.
    ///
    /// Malformed-id scenarios pass non-integer segments here.
    pub async fn fetch_pet_raw(&self, segment: &str) -> Result<ApiExchange, String> {
        let path = format!("/pet/{segment}");
        let request = self.client.get(format!("{}{path}", self.base_url));
        self.execute("GET", &path, None, request).await
    }

    /// POST /pet/ with a JSON payload.
    pub async fn create_pet(&self, payload: &Value) -> Result<ApiExchange, String> {
        let request = self.client.post(format!("{}/pet/", self.base_url)).json(payload);
        self.execute("POST", "/pet/", Some(payload.clone()), request).await
    }

    /// PUT /pet/ with a JSON payload.
    pub async fn update_pet(&self, payload: &Value) -> Result<ApiExchange, String> {
        let request = self.client.put(format!("{}/pet/", self.base_url)).json(payload);
        self.execute("PUT", "/pet/", Some(payload.clone()), request).await
    }

    /// DELETE /pet/{id} for a well-typed pet id.
    pub async fn remove_pet(&self, pet_id: i64) -> Result<ApiExchange, String> {
        self.remove_pet_raw(&pet_id.to_string()).await
    }

    /// DELETE /pet/{segment} with an arbitrary path segment.
    ///
    /// Carries the signed bearer token to mirror the expected request shape.
    pub async fn remove_pet_raw(&self, segment: &str) -> Result<ApiExchange, String> {
        let path = format!("/pet/{segment}");
        let request = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .bearer_auth(&self.bearer_token);
        self.execute("DELETE", &path, None, request).await
    }

    async fn execute(
        &self,
        method: &str,
        path: &str,
        request_body: Option<Value>,
        request: RequestBuilder,
    ) -> Result<ApiExchange, String> {
        let response = request
            .send()
            .await
            .map_err(|err| format!("{method} {path} transport failure: {err}"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| format!("{method} {path} failed reading body: {err}"))?;
        self.record(method, path, request_body, status, &body);
        Ok(ApiExchange {
            status,
            body,
        })
    }

    fn record(&self, method: &str, path: &str, request: Option<Value>, status: u16, body: &str) {
        if let Ok(mut entries) = self.transcript.lock() {
            let sequence = entries.len() as u64;
            entries.push(TranscriptEntry {
                sequence,
                method: method.to_string(),
                path: path.to_string(),
                request,
                status,
                body: body.to_string(),
            });
        }
    }
}
