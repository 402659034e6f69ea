//! Configuration errors for the Polyaxon API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings fail at build time rather than on the first request.
//!
//! # Example
//!
//! ```rust
//! use polyaxon_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Polyaxon auth token.")]
    EmptyApiKey,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide an http or https URL (e.g., 'https://polyaxon.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A numeric setting is out of its accepted range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    HttpClientBuild {
        /// The error reported by the HTTP library.
        message: String,
    },
}
