//! HTTP transport layer.
//!
//! - [`Transport`]: the trait API clients dispatch through
//! - [`HttpClient`]: the production transport on `reqwest`
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: an assembled request
//! - [`HttpResponse`]: a completed exchange (any status)
//! - [`HttpError`], [`NetworkError`], [`HttpStatusError`]: failures
//!
//! # Retry Behavior
//!
//! `HttpClient` retries 429, 500, 502, 503 and 504 responses when the
//! configuration sets `tries` above 1 (the default is 1, no retries). The
//! wait is the `Retry-After` header value when present, otherwise one
//! second. Once attempts are exhausted the last response is returned as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpStatusError, InvalidHttpRequestError, NetworkError, NetworkErrorKind,
};
pub use http_client::{
    HttpClient, MAX_RETRY_WAIT_TIME, RETRYABLE_STATUS_CODES, RETRY_WAIT_TIME, SDK_VERSION,
};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
