//! Errors surfaced by the resource clients.

use thiserror::Error;

use crate::clients::{HttpStatusError, InvalidHttpRequestError, NetworkError};
use crate::models::{DecodeError, RuntimeError};

/// Error returned by every resource client operation.
///
/// Each variant names the operation (the snake_case operation id, such as
/// `get_connection`) so failures can be traced without a backtrace.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::ApiError;
///
/// let error = ApiError::MissingParameter {
///     operation: "get_connection",
///     parameter: "uuid",
/// };
/// assert!(error.is_missing_parameter());
/// assert_eq!(
///     error.to_string(),
///     "Required parameter 'uuid' was missing when calling get_connection."
/// );
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was unset. Raised before any I/O.
    #[error("Required parameter '{parameter}' was missing when calling {operation}.")]
    MissingParameter {
        /// The operation that was called.
        operation: &'static str,
        /// The missing parameter.
        parameter: &'static str,
    },

    /// The request could not be assembled.
    #[error("Invalid request for {operation}: {source}")]
    InvalidRequest {
        /// The operation that was called.
        operation: &'static str,
        /// What was wrong with the request.
        source: InvalidHttpRequestError,
    },

    /// The exchange did not complete.
    #[error("{operation} failed: {source}")]
    Network {
        /// The operation that was called.
        operation: &'static str,
        /// The transport failure.
        source: NetworkError,
    },

    /// The server answered with a non-2xx status.
    #[error("{operation} failed: {source}")]
    HttpStatus {
        /// The operation that was called.
        operation: &'static str,
        /// The status, raw body and structured error.
        source: HttpStatusError,
    },

    /// The response body did not match the expected model.
    #[error("Failed to decode response of {operation}: {source}")]
    Decode {
        /// The operation that was called.
        operation: &'static str,
        /// The decode failure.
        source: DecodeError,
    },
}

impl ApiError {
    /// Returns the operation this error was raised for.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::MissingParameter { operation, .. }
            | Self::InvalidRequest { operation, .. }
            | Self::Network { operation, .. }
            | Self::HttpStatus { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// Returns `true` for [`ApiError::MissingParameter`].
    #[must_use]
    pub const fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// Returns the missing parameter name, if this is a missing-parameter error.
    #[must_use]
    pub const fn missing_parameter(&self) -> Option<&'static str> {
        match self {
            Self::MissingParameter { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }

    /// Returns `true` for [`ApiError::Network`].
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns `true` for [`ApiError::Decode`].
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status code of a non-2xx response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { source, .. } => Some(source.code),
            _ => None,
        }
    }

    /// Returns the structured error body of a non-2xx response, if decoded.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&RuntimeError> {
        match self {
            Self::HttpStatus { source, .. } => source.error.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` if the server reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404))
    }
}
