//! # Polyaxon API Rust SDK
//!
//! A typed Rust client for the Polyaxon REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PolyaxonConfig`] and [`PolyaxonConfigBuilder`]
//! - Validated newtypes for the deployment URL and API token
//! - API-key authentication through a pluggable [`ApiKeyProvider`]
//! - Schema models with lenient or strict JSON decoding ([`models`])
//! - Resource clients with raw and decoded forms of every operation ([`apis`])
//! - An async HTTP transport with retry handling for 429/5xx responses
//!
//! ## Quick Start
//!
//! ```rust
//! use polyaxon_api::{ApiClient, ApiKey, HostUrl, PolyaxonConfig};
//!
//! let config = PolyaxonConfig::builder()
//!     .host(HostUrl::new("https://polyaxon.example.com").unwrap())
//!     .api_key(ApiKey::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(config).unwrap();
//! let connections = client.connections_v1();
//! # let _ = connections;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use polyaxon_api::apis::ListConnectionsRequest;
//! use polyaxon_api::{ApiClient, PolyaxonConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads POLYAXON_HOST, POLYAXON_AUTH_TOKEN and POLYAXON_AUTH_TOKEN_PREFIX
//! let client = ApiClient::new(PolyaxonConfig::from_env()?)?;
//!
//! let mut params = ListConnectionsRequest::for_owner("acme");
//! params.limit = Some(20);
//! let page = client.connections_v1().list_connections(&params).await?;
//! println!("{} connections", page.count.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Credentials
//!
//! Any `Fn(&str) -> String` can supply the `Authorization` header. It is
//! invoked with the scheme name on every request and its return value is
//! sent verbatim:
//!
//! ```rust
//! use polyaxon_api::{HostUrl, PolyaxonConfig};
//!
//! let config = PolyaxonConfig::builder()
//!     .host(HostUrl::new("http://localhost:8000").unwrap())
//!     .api_key_provider(|_scheme: &str| "Bearer short-lived".to_string())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.authorization().as_deref(), Some("Bearer short-lived"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Schema drift tolerant**: Lenient decoding keeps unexpected values
//!   instead of failing

pub mod apis;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use auth::{ApiKeyProvider, StaticApiKey};
pub use config::{ApiKey, HostUrl, PolyaxonConfig, PolyaxonConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpStatusError, NetworkError,
    Transport,
};

// Re-export the API layer
pub use apis::{ApiClient, ApiError, ApiResponse, ConnectionsV1Api, QueuesV1Api, RunsV1Api};
pub use models::{DecodeError, DecodeMode, Model};
