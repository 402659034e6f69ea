//! The `reqwest`-backed [`Transport`].

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, NetworkError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::PolyaxonConfig;
use crate::error::ConfigError;

/// Fixed retry wait time in seconds when no `Retry-After` is sent.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Upper bound in seconds on any single retry wait.
pub const MAX_RETRY_WAIT_TIME: u64 = 60;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status codes that are retried when `tries > 1`.
pub const RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// HTTP client for a Polyaxon deployment.
///
/// The client handles:
/// - Prefixing request paths with the configured host
/// - Default headers (`User-Agent`, `Accept: application/json`)
/// - The optional per-request timeout
/// - Retrying 429/500/502/503/504 responses up to the configured `tries`,
///   waiting for `Retry-After` when the server sends it
///
/// Authentication is not handled here; the API runtime attaches the
/// `Authorization` header to each request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, and the inner `reqwest::Client` pools
/// connections, so one instance should be shared across tasks.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::{HostUrl, HttpClient, PolyaxonConfig};
///
/// let config = PolyaxonConfig::builder()
///     .host(HostUrl::new("http://localhost:8000").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "http://localhost:8000");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &PolyaxonConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Polyaxon API Rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_uri: config.host().as_ref().to_string(),
            default_headers,
            tries: config.tries(),
        })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of attempts made for retryable responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    async fn send_once(
        &self,
        url: &str,
        request: &HttpRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, NetworkError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Patch => self.client.patch(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn calculate_retry_delay(response: &HttpResponse) -> Duration {
        let fallback = Duration::from_secs(RETRY_WAIT_TIME);
        response
            .retry_request_after
            .map_or(fallback, |secs| {
                Duration::try_from_secs_f64(secs).unwrap_or(fallback)
            })
            .min(Duration::from_secs(MAX_RETRY_WAIT_TIME))
    }
}

impl Transport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let response = self.send_once(&url, &request, &headers).await?;

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Polyaxon API at {}, received: {}",
                    request.path,
                    reason
                );
            }

            let retryable = RETRYABLE_STATUS_CODES.contains(&response.code);
            if !retryable || tries >= self.tries {
                return Ok(response);
            }

            let delay = Self::calculate_retry_delay(&response);
            tracing::warn!(
                "Retrying {} {} after status {} (attempt {} of {}, waiting {:?})",
                request.http_method,
                request.path,
                response.code,
                tries,
                self.tries,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}
