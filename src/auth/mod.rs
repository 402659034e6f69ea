//! Authentication for the Polyaxon API.
//!
//! Polyaxon authenticates requests with a single `Authorization` header
//! carrying an API token. The header value comes from an
//! [`ApiKeyProvider`]: either a [`StaticApiKey`] built from the configured
//! token and prefix, or any custom provider set on the configuration.
//!
//! # Example
//!
//! ```rust
//! use polyaxon_api::{ApiKey, ApiKeyProvider, StaticApiKey};
//!
//! let provider = StaticApiKey::new(ApiKey::new("abc123").unwrap());
//! assert_eq!(provider.api_key("Authorization"), "token abc123");
//! ```

mod api_key;

pub use api_key::{ApiKeyProvider, StaticApiKey};

/// The scheme name providers are invoked with.
pub const AUTHORIZATION: &str = "Authorization";
