// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Toggl integration REST endpoint.
//!
//! Every operation is a single authenticated request against one fixed
//! resource. There is no retry, no backoff, and no connection state beyond
//! the pooling `reqwest` does internally.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::error::ApiError;
use crate::token::ApiToken;

/// Fixed Basic-Auth password. The API token goes in the username slot.
const BASIC_AUTH_PASSWORD: &str = "api_token";

/// Path of the resource all operations target.
const RESOURCE_PATH: &str = "/posts/1";

// ============================================================================
// ClientConfig - Configuration for the API client
// ============================================================================

/// Configuration for an [`ApiClient`].
///
/// Holds the connection parameters. Each request is independent, so the only
/// knobs are the endpoint and the per-request timeout.
///
/// # Examples
///
/// ```
/// use toggl_lib::{ApiToken, ClientConfig};
/// use std::time::Duration;
///
/// let token = ApiToken::new("d34db33f")?;
///
/// // Defaults: production endpoint, 10 second timeout
/// let client = ClientConfig::new().into_client(token.clone())?;
///
/// // With all options
/// let client = ClientConfig::new()
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(5))
///     .into_client(token)?;
/// # Ok::<(), toggl_lib::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Default API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with default endpoint and timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom base URL. A trailing slash is stripped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self, token: ApiToken) -> Result<ApiClient, ApiError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ApiError::Unexpected(err.to_string()))?;

        Ok(ApiClient {
            token,
            base_url: self.base_url,
            timeout: self.timeout,
            client,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ApiClient - Authenticated client for the REST endpoint
// ============================================================================

/// Client for the Toggl integration REST endpoint.
///
/// Authenticates via HTTP Basic with the API token as username and a fixed
/// constant as password. Each operation makes exactly one attempt.
///
/// # Examples
///
/// ```no_run
/// use toggl_lib::{ApiClient, ApiToken};
///
/// # async fn example() -> toggl_lib::Result<()> {
/// let client = ApiClient::new(ApiToken::new("d34db33f")?)?;
/// let data = client.get_data().await?;
/// println!("title: {}", data["title"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    token: ApiToken,
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl ApiClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(token: ApiToken) -> Result<Self, ApiError> {
        ClientConfig::new().into_client(token)
    }

    /// Returns the base URL the client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the resource.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` per the taxonomy in [`crate::error`].
    pub async fn get_data(&self) -> Result<Value, ApiError> {
        self.request(Method::GET, None, None).await
    }

    /// Updates the resource title.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` per the taxonomy in [`crate::error`].
    pub async fn set_title(&self, value: &str) -> Result<Value, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );

        self.request(
            Method::PATCH,
            Some(serde_json::json!({ "title": value })),
            Some(headers),
        )
        .await
    }

    /// Builds the URL of the fixed resource.
    fn resource_url(&self) -> String {
        format!("{}{RESOURCE_PATH}", self.base_url)
    }

    /// Issues one authenticated request and parses the JSON response.
    async fn request(
        &self,
        method: Method,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<Value, ApiError> {
        let url = self.resource_url();

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(self.token.as_str(), Some(BASIC_AUTH_PASSWORD));

        if let Some(headers) = headers {
            request = request.headers(headers);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| self.classify(&err))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Authentication);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|err| self.classify(&err))?;

        tracing::debug!(body = %data, "Received API response");

        Ok(data)
    }

    /// Maps a transport error onto the error taxonomy.
    fn classify(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else if err.is_connect() {
            ApiError::Connection(err.to_string())
        } else {
            ApiError::Unexpected(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ApiToken {
        ApiToken::new("abc123").unwrap()
    }

    #[test]
    fn config_default_values() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url(), ClientConfig::DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_with_base_url() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn config_strips_trailing_slash() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn config_with_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn config_into_client() {
        let client = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .into_client(token())
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn resource_url_appends_fixed_path() {
        let client = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .into_client(token())
            .unwrap();
        assert_eq!(client.resource_url(), "http://localhost:8080/posts/1");
    }

    #[test]
    fn default_client_targets_production_endpoint() {
        let client = ApiClient::new(token()).unwrap();
        assert_eq!(
            client.resource_url(),
            "https://jsonplaceholder.typicode.com/posts/1"
        );
    }
}
