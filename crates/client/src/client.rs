//! The API client: one pooled HTTP connection set, one bearer token slot,
//! and the shared request/response plumbing every endpoint module uses.

use std::sync::RwLock;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Client for the AAAJ backend REST API.
///
/// Construct once at application start and pass by reference; cloning the
/// inner `reqwest::Client` is cheap but the token slot is shared state
/// that belongs in a single place.
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
    token: RwLock<Option<String>>,
}

/// Simple acknowledgement body (`{ "success": …, "message": … }`) returned
/// by several endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// List responses arrive wrapped as `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            token: RwLock::new(None),
        })
    }

    // ---- session token ----

    /// Attach a bearer token to every subsequent request.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Drop the stored token (logout, or a 401 from the backend).
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    // ---- request plumbing ----

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "sending API request");
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.bearer() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        self.parse(response).await
    }

    /// GET an enveloped list and unwrap it.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        Ok(self.get_json::<DataEnvelope<Vec<T>>>(path).await?.data)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.parse(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        self.parse(response).await
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        self.parse(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.parse(response).await
    }

    /// DELETE where the backend sends no meaningful body.
    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.ensure_success(response).await?;
        Ok(())
    }

    /// Parse a successful JSON body into the expected type.
    pub(crate) async fn parse<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = self.ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Map non-2xx responses onto [`ApiError`]. A 401 also drops the
    /// stored token so the UI falls back to the login screen.
    pub(crate) async fn ensure_success(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        tracing::warn!(status = status.as_u16(), "API request failed");

        if status == StatusCode::UNAUTHORIZED {
            self.clear_token();
        }

        Err(classify_status(status.as_u16(), body))
    }
}

/// Status-code → error mapping, kept separate so it can be tested without
/// a live response.
pub(crate) fn classify_status(status: u16, body: String) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        500..=599 => ApiError::Server { status, body },
        _ => ApiError::Api { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn client() -> ApiClient {
        ApiClient::new(&ClientConfig::new("http://localhost:3000")).unwrap()
    }

    #[test]
    fn urls_are_joined_onto_the_versioned_root() {
        assert_eq!(
            client().url("/games/12"),
            "http://localhost:3000/api/v1/games/12"
        );
    }

    #[test]
    fn token_slot_lifecycle() {
        let client = client();
        assert!(!client.has_token());
        client.set_token("jwt-abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn statuses_map_to_the_expected_variants() {
        assert_matches!(classify_status(401, String::new()), ApiError::Unauthorized);
        assert_matches!(classify_status(403, String::new()), ApiError::Forbidden);
        assert_matches!(classify_status(404, String::new()), ApiError::NotFound);
        assert_matches!(
            classify_status(500, "boom".to_string()),
            ApiError::Server { status: 500, .. }
        );
        assert_matches!(
            classify_status(422, String::new()),
            ApiError::Api { status: 422, .. }
        );
    }

    #[test]
    fn list_envelope_unwraps() {
        let envelope: DataEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{ "data": [1, 2, 3] }"#).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn network_failure_surfaces_as_request_error() {
        // Nothing listens on the discard port; the connect fails fast.
        let client = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.get_json::<serde_json::Value>("/games").await.unwrap_err();
        assert_matches!(err, ApiError::Request(_));
    }
}
