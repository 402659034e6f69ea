//! The seam between API clients and the network.

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Executes one HTTP request.
///
/// Implementations prefix the host, attach their default headers, and
/// return every completed exchange as an [`HttpResponse`], including
/// non-2xx ones. They fail only when no response was obtained.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation; tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation
    /// and [`HttpError::Network`] if the exchange does not complete.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport> Transport for &T {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).execute(request).await
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).execute(request).await
    }
}
