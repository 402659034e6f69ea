//! Deferred-decode response wrapper.

use std::collections::HashMap;
use std::fmt;

use crate::apis::errors::ApiError;
use crate::clients::HttpResponse;
use crate::models::{DecodeError, DecodeMode, Model};

type DecodeFn<T> = fn(&HttpResponse, DecodeMode) -> Result<T, DecodeError>;

/// A successful (2xx) exchange whose body has not been decoded yet.
///
/// The `_raw` form of every operation returns this wrapper so callers can
/// inspect the status and headers first. [`ApiResponse::value`] runs the
/// decode on demand; it can be called more than once.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use polyaxon_api::apis::ApiResponse;
/// use polyaxon_api::clients::HttpResponse;
/// use polyaxon_api::models::{DecodeMode, V1Queue};
///
/// let raw = HttpResponse::new(200, HashMap::new(), r#"{"uuid": "q1", "priority": 0}"#);
/// let response = ApiResponse::<V1Queue>::json("get_queue", raw, DecodeMode::Lenient);
///
/// assert_eq!(response.status(), 200);
/// let queue = response.value().unwrap();
/// assert_eq!(queue.uuid.as_deref(), Some("q1"));
/// assert_eq!(queue.priority, Some(0));
/// ```
pub struct ApiResponse<T> {
    operation: &'static str,
    response: HttpResponse,
    mode: DecodeMode,
    decode: DecodeFn<T>,
}

impl<T: Model> ApiResponse<T> {
    /// Wraps a response whose body decodes into the model `T`.
    #[must_use]
    pub fn json(operation: &'static str, response: HttpResponse, mode: DecodeMode) -> Self {
        Self {
            operation,
            response,
            mode,
            decode: decode_json::<T>,
        }
    }
}

impl ApiResponse<()> {
    /// Wraps a response that carries no value (e.g. a delete).
    ///
    /// Any body the server sends is kept but never parsed.
    #[must_use]
    pub fn void(operation: &'static str, response: HttpResponse) -> Self {
        Self {
            operation,
            response,
            mode: DecodeMode::default(),
            decode: decode_void,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Returns the operation that produced this response.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.code
    }

    /// Returns the response headers, keyed by lower-cased name.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.response.headers
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.response.body
    }

    /// Returns the underlying HTTP response.
    #[must_use]
    pub const fn raw(&self) -> &HttpResponse {
        &self.response
    }

    /// Consumes the wrapper, returning the HTTP response.
    #[must_use]
    pub fn into_raw(self) -> HttpResponse {
        self.response
    }

    /// Decodes the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON or does
    /// not match the expected model.
    pub fn value(&self) -> Result<T, ApiError> {
        (self.decode)(&self.response, self.mode).map_err(|source| ApiError::Decode {
            operation: self.operation,
            source,
        })
    }
}

fn decode_json<T: Model>(response: &HttpResponse, mode: DecodeMode) -> Result<T, DecodeError> {
    T::from_json_str(&response.body, mode)
}

#[allow(clippy::unnecessary_wraps)]
const fn decode_void(_: &HttpResponse, _: DecodeMode) -> Result<(), DecodeError> {
    Ok(())
}

impl<T> Clone for ApiResponse<T> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            response: self.response.clone(),
            mode: self.mode,
            decode: self.decode,
        }
    }
}

impl<T> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("operation", &self.operation)
            .field("status", &self.response.code)
            .field("mode", &self.mode)
            .field("body_len", &self.response.body.len())
            .finish_non_exhaustive()
    }
}
