//! HTTP-level error types.
//!
//! - [`NetworkError`]: the exchange did not complete (DNS, connect, timeout)
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: what a [`Transport`](crate::clients::Transport) returns
//! - [`HttpStatusError`]: a completed exchange with a non-2xx status
//!
//! Transports return every completed exchange as a response, whatever its
//! status. Mapping non-2xx statuses to [`HttpStatusError`] happens one layer
//! up, in the API runtime.

use std::fmt;

use thiserror::Error;

use crate::models::RuntimeError;

/// Broad classification of a network failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// The connection could not be established.
    Connect,
    /// The request or response timed out.
    Timeout,
    /// The response body could not be read.
    Body,
    /// Any other transport failure.
    Other,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connect => "connection failed",
            Self::Timeout => "timed out",
            Self::Body => "body read failed",
            Self::Other => "transport failure",
        })
    }
}

/// A request that did not complete.
#[derive(Debug, Error)]
#[error("Network error ({kind}): {message}")]
pub struct NetworkError {
    /// What went wrong.
    pub kind: NetworkErrorKind,
    /// Description from the underlying HTTP library.
    pub message: String,
}

impl NetworkError {
    /// Creates a network error of the given kind.
    #[must_use]
    pub fn new(kind: NetworkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if the failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.kind == NetworkErrorKind::Timeout
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            NetworkErrorKind::Timeout
        } else if error.is_connect() {
            NetworkErrorKind::Connect
        } else if error.is_body() || error.is_decode() {
            NetworkErrorKind::Body
        } else {
            NetworkErrorKind::Other
        };
        Self::new(kind, error.to_string())
    }
}

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "put".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use put without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is not absolute.
    #[error("Request path '{path}' must start with '/'.")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// A path template placeholder had no value.
    #[error("Path template '{template}' has no value for placeholder '{placeholder}'.")]
    UnresolvedPlaceholder {
        /// The path template.
        template: String,
        /// The placeholder name, without braces.
        placeholder: String,
    },
}

/// Error type returned by transports.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.into())
    }
}

/// A completed exchange whose status was not 2xx.
///
/// `error` holds the decoded [`RuntimeError`] body when the server sent
/// one; `body` always holds the raw text.
#[derive(Debug, Error)]
#[error("HTTP {code}: {}", describe(.error.as_ref(), .body))]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The `X-Request-Id` header, for error reports.
    pub request_id: Option<String>,
    /// The structured error body, when decodable.
    pub error: Option<RuntimeError>,
}

const MAX_BODY_IN_MESSAGE: usize = 200;

fn describe(error: Option<&RuntimeError>, body: &str) -> String {
    if let Some(summary) = error.and_then(RuntimeError::summary) {
        return summary.to_string();
    }
    let body = body.trim();
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    match body.char_indices().nth(MAX_BODY_IN_MESSAGE) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
