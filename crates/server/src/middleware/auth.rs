//! API key authentication for write and delete routes.
//!
//! Provides an extractor that requires a valid API key in route handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that requires a valid API key.
///
/// The key is accepted from the `api-key` query parameter or the `api-key`
/// request header and checked against the cached secret in constant time.
/// A missing or mismatching key rejects the request with 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _auth: RequireApiKey,
///     State(state): State<AppState>,
/// ) -> Result<Json<SuccessPayload>> {
///     // only reached with a valid key
/// }
/// ```
#[derive(Debug)]
pub struct RequireApiKey;

#[derive(Debug, Deserialize)]
struct ApiKeyParams {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_query = Query::<ApiKeyParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.api_key);

        let candidate = match from_query {
            Some(key) => Some(key),
            None => parts
                .headers
                .get("api-key")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
        };

        match candidate {
            Some(key) if state.api_key().verify(&key) => Ok(Self),
            _ => Err(ApiError::Unauthorized("invalid api key".to_owned())),
        }
    }
}
