//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{CatalogApi, PokemonApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// PokéAPI client
///
/// Wraps `reqwest` with request correlation IDs and status mapping. A failed
/// request is reported once; there is no retry.
#[derive(Clone)]
pub struct PokeApiClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl PokeApiClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("pokedex/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the catalog listing endpoint
    #[must_use]
    pub fn catalog(&self) -> CatalogApi {
        CatalogApi::new(self.clone())
    }

    /// Access the per-entry detail endpoint
    #[must_use]
    pub fn pokemon(&self) -> PokemonApi {
        PokemonApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP
    // -------------------------------------------------------------------------

    /// Absolute URL for a path below the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    /// Perform a GET request below the base URL
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url_for(path);
        self.get_url(&url).await
    }

    /// Perform a GET request to an absolute URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let result = self.handle_response(url, response).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    fn map_send_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Request(error)
        }
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;
            Ok(serde_json::from_slice(&body)?)
        } else if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound(url.to_string()))
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

/// Join a base URL and a relative path with exactly one slash between them
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
