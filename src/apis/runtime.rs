//! The shared dispatch routine behind every resource client.

use serde_json::Value;

use crate::apis::errors::ApiError;
use crate::apis::path::{build_path, Operation};
use crate::apis::query::QueryParams;
use crate::apis::response::ApiResponse;
use crate::apis::{ConnectionsV1Api, QueuesV1Api, RunsV1Api};
use crate::auth::AUTHORIZATION;
use crate::clients::{
    DataType, HttpClient, HttpError, HttpRequest, HttpResponse, HttpStatusError, Transport,
};
use crate::config::PolyaxonConfig;
use crate::error::ConfigError;
use crate::models::{DecodeMode, Model, RuntimeError};

/// Configuration plus transport, shared by the resource clients.
///
/// The client holds no mutable state, so concurrent calls through one
/// instance are independent. Resource clients borrow it:
///
/// ```rust
/// use polyaxon_api::{ApiClient, ApiKey, HostUrl, PolyaxonConfig};
///
/// let config = PolyaxonConfig::builder()
///     .host(HostUrl::new("https://polyaxon.example.com").unwrap())
///     .api_key(ApiKey::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(config).unwrap();
/// let connections = client.connections_v1();
/// let queues = client.queues_v1();
/// # let _ = (connections, queues);
/// ```
#[derive(Debug)]
pub struct ApiClient<T: Transport = HttpClient> {
    config: PolyaxonConfig,
    transport: T,
}

impl ApiClient<HttpClient> {
    /// Creates a client with the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: PolyaxonConfig) -> Result<Self, ConfigError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client that dispatches through `transport`.
    #[must_use]
    pub const fn with_transport(config: PolyaxonConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PolyaxonConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the connections client.
    #[must_use]
    pub const fn connections_v1(&self) -> ConnectionsV1Api<'_, T> {
        ConnectionsV1Api::new(self)
    }

    /// Returns the agent queues client.
    #[must_use]
    pub const fn queues_v1(&self) -> QueuesV1Api<'_, T> {
        QueuesV1Api::new(self)
    }

    /// Returns the runs client.
    #[must_use]
    pub const fn runs_v1(&self) -> RunsV1Api<'_, T> {
        RunsV1Api::new(self)
    }

    /// Dispatches an operation and returns its 2xx response.
    ///
    /// Substitutes `path_params` into the operation's template, attaches
    /// the JSON body and the `Authorization` header, then maps transport
    /// failures and non-2xx statuses into [`ApiError`].
    pub(crate) async fn request(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let path = build_path(operation.template, path_params).map_err(|source| {
            ApiError::InvalidRequest {
                operation: operation.name,
                source,
            }
        })?;

        let mut builder =
            HttpRequest::builder(operation.http_method, path).query(query.into_pairs());
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        if let Some(value) = self.config.authorization() {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = builder.build().map_err(|source| ApiError::InvalidRequest {
            operation: operation.name,
            source,
        })?;

        tracing::debug!(
            operation = operation.name,
            method = %request.http_method,
            path = %request.path,
            "Dispatching Polyaxon API request"
        );

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|error| match error {
                HttpError::Network(source) => ApiError::Network {
                    operation: operation.name,
                    source,
                },
                HttpError::InvalidRequest(source) => ApiError::InvalidRequest {
                    operation: operation.name,
                    source,
                },
            })?;

        tracing::debug!(
            operation = operation.name,
            status = response.code,
            "Polyaxon API request completed"
        );

        if !response.is_ok() {
            return Err(ApiError::HttpStatus {
                operation: operation.name,
                source: status_error(response),
            });
        }

        Ok(response)
    }

    /// Dispatches an operation whose 2xx body decodes into `M`.
    pub(crate) async fn json<M: Model>(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<ApiResponse<M>, ApiError> {
        let response = self.request(operation, path_params, query, body).await?;
        Ok(ApiResponse::json(
            operation.name,
            response,
            self.config.decode_mode(),
        ))
    }

    /// Dispatches an operation that returns no value.
    pub(crate) async fn void(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self.request(operation, path_params, query, body).await?;
        Ok(ApiResponse::void(operation.name, response))
    }
}

/// Builds the status error for a non-2xx response.
///
/// The structured body is decoded leniently; servers and proxies often
/// answer errors with HTML or plain text, in which case only the raw body
/// is kept.
fn status_error(response: HttpResponse) -> HttpStatusError {
    let error = if response.is_body_empty() {
        None
    } else {
        RuntimeError::from_json_str(&response.body, DecodeMode::Lenient).ok()
    };
    let request_id = response.request_id().map(str::to_string);

    HttpStatusError {
        code: response.code,
        body: response.body,
        request_id,
        error,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A recording stub transport for resource client tests.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::clients::{HttpError, HttpRequest, HttpResponse, Transport};

    /// Records every request and answers with a fixed response.
    #[derive(Debug)]
    pub struct RecordingTransport {
        pub requests: Mutex<Vec<HttpRequest>>,
        code: u16,
        body: String,
    }

    impl RecordingTransport {
        pub fn new(code: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                code,
                body: body.to_string(),
            }
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for RecordingTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            request.verify()?;
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse::new(self.code, HashMap::new(), self.body.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use crate::clients::{HttpMethod, NetworkError, NetworkErrorKind};
    use crate::config::{ApiKey, HostUrl};
    use crate::models::V1ConnectionResponse;

    const GET_CONNECTION: Operation = Operation::new(
        "get_connection",
        HttpMethod::Get,
        "/api/v1/orgs/{owner}/connections/{uuid}",
    );

    fn config() -> PolyaxonConfig {
        PolyaxonConfig::builder()
            .host(HostUrl::new("https://polyaxon.example.com").unwrap())
            .api_key(ApiKey::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_request_attaches_authorization_and_encoded_path() {
        let client = ApiClient::with_transport(config(), RecordingTransport::new(200, "{}"));

        client
            .request(
                &GET_CONNECTION,
                &[("owner", "acme"), ("uuid", "a b")],
                QueryParams::new(),
                None,
            )
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.path, "/api/v1/orgs/acme/connections/a%20b");
        assert_eq!(request.header("Authorization"), Some("token secret"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_request_without_credentials_sends_no_authorization() {
        let config = PolyaxonConfig::builder()
            .host(HostUrl::new("https://polyaxon.example.com").unwrap())
            .build()
            .unwrap();
        let client = ApiClient::with_transport(config, RecordingTransport::new(200, "{}"));

        client
            .request(
                &GET_CONNECTION,
                &[("owner", "acme"), ("uuid", "u1")],
                QueryParams::new(),
                None,
            )
            .await
            .unwrap();

        assert!(client.transport().last().header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_http_status_with_runtime_error() {
        let transport = RecordingTransport::new(
            404,
            r#"{"error":"not_found","code":5,"message":"Connection not found"}"#,
        );
        let client = ApiClient::with_transport(config(), transport);

        let error = client
            .json::<V1ConnectionResponse>(
                &GET_CONNECTION,
                &[("owner", "acme"), ("uuid", "u1")],
                QueryParams::new(),
                None,
            )
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(error.operation(), "get_connection");
        let runtime_error = error.runtime_error().unwrap();
        assert_eq!(runtime_error.message.as_deref(), Some("Connection not found"));
        assert!(error.to_string().contains("Connection not found"));
    }

    #[tokio::test]
    async fn test_non_json_error_body_keeps_raw_text() {
        let client =
            ApiClient::with_transport(config(), RecordingTransport::new(502, "Bad Gateway"));

        let error = client
            .request(
                &GET_CONNECTION,
                &[("owner", "acme"), ("uuid", "u1")],
                QueryParams::new(),
                None,
            )
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), Some(502));
        assert!(error.runtime_error().is_none());
        assert!(error.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_unresolved_placeholder_is_invalid_request() {
        let client = ApiClient::with_transport(config(), RecordingTransport::new(200, "{}"));

        let error = client
            .request(&GET_CONNECTION, &[("owner", "acme")], QueryParams::new(), None)
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::InvalidRequest { .. }));
        assert_eq!(client.transport().calls(), 0);
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(NetworkError::new(NetworkErrorKind::Timeout, "timed out").into())
        }
    }

    #[tokio::test]
    async fn test_network_failure_names_operation() {
        let client = ApiClient::with_transport(config(), FailingTransport);

        let error = client
            .request(
                &GET_CONNECTION,
                &[("owner", "acme"), ("uuid", "u1")],
                QueryParams::new(),
                None,
            )
            .await
            .unwrap_err();

        assert!(error.is_network());
        assert_eq!(error.operation(), "get_connection");
    }
}
