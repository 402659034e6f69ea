//! Configuration types for the Polyaxon API client.
//!
//! # Overview
//!
//! - [`PolyaxonConfig`]: immutable settings shared by every API client
//! - [`PolyaxonConfigBuilder`]: a builder for constructing [`PolyaxonConfig`]
//! - [`ApiKey`]: a validated, debug-masked API token
//! - [`HostUrl`]: the validated base URL of a Polyaxon deployment
//!
//! # Example
//!
//! ```rust
//! use polyaxon_api::{ApiKey, HostUrl, PolyaxonConfig};
//!
//! let config = PolyaxonConfig::builder()
//!     .host(HostUrl::new("https://polyaxon.example.com").unwrap())
//!     .api_key(ApiKey::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.authorization().as_deref(),
//!     Some("token my-token")
//! );
//! ```

mod newtypes;

pub use newtypes::{ApiKey, HostUrl};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{ApiKeyProvider, StaticApiKey, AUTHORIZATION};
use crate::error::ConfigError;
use crate::models::DecodeMode;

/// Environment variable holding the deployment URL.
pub const ENV_HOST: &str = "POLYAXON_HOST";
/// Environment variable holding the API token.
pub const ENV_AUTH_TOKEN: &str = "POLYAXON_AUTH_TOKEN";
/// Environment variable overriding the token prefix.
pub const ENV_AUTH_TOKEN_PREFIX: &str = "POLYAXON_AUTH_TOKEN_PREFIX";

/// Configuration for the Polyaxon API client.
///
/// # Thread Safety
///
/// `PolyaxonConfig` is `Clone`, `Send`, and `Sync`. The credential provider
/// is shared behind an `Arc`, so clones are cheap and concurrent calls never
/// contend on it.
#[derive(Clone)]
pub struct PolyaxonConfig {
    host: HostUrl,
    api_key_provider: Option<Arc<dyn ApiKeyProvider>>,
    user_agent_prefix: Option<String>,
    decode_mode: DecodeMode,
    tries: u32,
    timeout: Option<Duration>,
}

impl PolyaxonConfig {
    /// Creates a new builder for constructing a `PolyaxonConfig`.
    #[must_use]
    pub fn builder() -> PolyaxonConfigBuilder {
        PolyaxonConfigBuilder::new()
    }

    /// Builds a configuration from `POLYAXON_HOST`, `POLYAXON_AUTH_TOKEN`
    /// and `POLYAXON_AUTH_TOKEN_PREFIX`.
    ///
    /// The token is optional; without it requests are sent unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `POLYAXON_HOST` is
    /// unset, or a validation error for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST)
            .filter(|h| !h.trim().is_empty())
            .ok_or(ConfigError::MissingRequiredField { field: ENV_HOST })?;

        let mut builder = Self::builder().host(HostUrl::new(host)?);
        if let Some(token) = lookup(ENV_AUTH_TOKEN).filter(|t| !t.trim().is_empty()) {
            builder = builder.api_key(ApiKey::new(token)?);
        }
        if let Some(prefix) = lookup(ENV_AUTH_TOKEN_PREFIX) {
            builder = builder.api_key_prefix(prefix);
        }
        builder.build()
    }

    /// Returns the deployment base URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the credential provider, if any.
    #[must_use]
    pub fn api_key_provider(&self) -> Option<&dyn ApiKeyProvider> {
        self.api_key_provider.as_deref()
    }

    /// Returns the `Authorization` header value, invoking the provider.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.api_key_provider
            .as_ref()
            .map(|provider| provider.api_key(AUTHORIZATION))
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how responses are decoded.
    #[must_use]
    pub const fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Returns the number of attempts per request, at least 1.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for PolyaxonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyaxonConfig")
            .field("host", &self.host)
            .field(
                "api_key_provider",
                &self.api_key_provider.as_ref().map(|_| "*****"),
            )
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("decode_mode", &self.decode_mode)
            .field("tries", &self.tries)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// Verify PolyaxonConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolyaxonConfig>();
};

/// Builder for constructing [`PolyaxonConfig`] instances.
///
/// `host` is required. Everything else has a default.
///
/// # Defaults
///
/// - credentials: none (unauthenticated requests)
/// - `api_key_prefix`: `"token"`
/// - `decode_mode`: [`DecodeMode::Lenient`]
/// - `tries`: `1` (no retries)
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
///
/// A custom provider set with [`api_key_provider`](Self::api_key_provider)
/// takes precedence over a static `api_key`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use polyaxon_api::{ApiKey, DecodeMode, HostUrl, PolyaxonConfig};
///
/// let config = PolyaxonConfig::builder()
///     .host(HostUrl::new("http://localhost:8000").unwrap())
///     .api_key(ApiKey::new("abc").unwrap())
///     .api_key_prefix("Bearer")
///     .decode_mode(DecodeMode::Strict)
///     .tries(3)
///     .timeout(Duration::from_secs(30))
///     .user_agent_prefix("MyTool/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.authorization().as_deref(), Some("Bearer abc"));
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Default)]
pub struct PolyaxonConfigBuilder {
    host: Option<HostUrl>,
    api_key: Option<ApiKey>,
    api_key_prefix: Option<String>,
    api_key_provider: Option<Arc<dyn ApiKeyProvider>>,
    user_agent_prefix: Option<String>,
    decode_mode: Option<DecodeMode>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl PolyaxonConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deployment base URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a static API token.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the prefix sent before a static token. Defaults to `"token"`.
    #[must_use]
    pub fn api_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_key_prefix = Some(prefix.into());
        self
    }

    /// Sets a custom credential provider, used instead of a static token.
    #[must_use]
    pub fn api_key_provider<P>(mut self, provider: P) -> Self
    where
        P: ApiKeyProvider + 'static,
    {
        self.api_key_provider = Some(Arc::new(provider));
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how responses are decoded.
    #[must_use]
    pub const fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = Some(mode);
        self
    }

    /// Sets the number of attempts for retryable responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`PolyaxonConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set,
    /// and [`ConfigError::InvalidValue`] if `tries` is zero.
    pub fn build(self) -> Result<PolyaxonConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tries",
                reason: "must be at least 1".to_string(),
            });
        }

        let api_key_provider = self.api_key_provider.or_else(|| {
            self.api_key.map(|key| {
                let prefix = self
                    .api_key_prefix
                    .unwrap_or_else(|| StaticApiKey::DEFAULT_PREFIX.to_string());
                Arc::new(StaticApiKey::with_prefix(key, prefix)) as Arc<dyn ApiKeyProvider>
            })
        });

        Ok(PolyaxonConfig {
            host,
            api_key_provider,
            user_agent_prefix: self.user_agent_prefix,
            decode_mode: self.decode_mode.unwrap_or_default(),
            tries,
            timeout: self.timeout,
        })
    }
}

impl fmt::Debug for PolyaxonConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyaxonConfigBuilder")
            .field("host", &self.host)
            .field("api_key", &self.api_key)
            .field("api_key_prefix", &self.api_key_prefix)
            .field("has_api_key_provider", &self.api_key_provider.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn host() -> HostUrl {
        HostUrl::new("https://polyaxon.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_host() {
        let result = PolyaxonConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PolyaxonConfig::builder().host(host()).build().unwrap();

        assert!(config.api_key_provider().is_none());
        assert!(config.authorization().is_none());
        assert_eq!(config.decode_mode(), DecodeMode::Lenient);
        assert_eq!(config.tries(), 1);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = PolyaxonConfig::builder().host(host()).tries(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "tries", .. })
        ));
    }

    #[test]
    fn test_static_key_uses_default_prefix() {
        let config = PolyaxonConfig::builder()
            .host(host())
            .api_key(ApiKey::new("abc").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.authorization().as_deref(), Some("token abc"));
    }

    #[test]
    fn test_custom_provider_wins_over_static_key() {
        let config = PolyaxonConfig::builder()
            .host(host())
            .api_key(ApiKey::new("abc").unwrap())
            .api_key_provider(|name: &str| format!("custom for {name}"))
            .build()
            .unwrap();
        assert_eq!(
            config.authorization().as_deref(),
            Some("custom for Authorization")
        );
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = PolyaxonConfig::builder()
            .host(host())
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PolyaxonConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync_and_clone() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<PolyaxonConfig>();
    }

    #[test]
    fn test_from_lookup_reads_host_token_and_prefix() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_HOST, "http://localhost:8000/"),
            (ENV_AUTH_TOKEN, "t0k3n"),
            (ENV_AUTH_TOKEN_PREFIX, "Bearer"),
        ]);
        let config =
            PolyaxonConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();

        assert_eq!(config.host().as_ref(), "http://localhost:8000");
        assert_eq!(config.authorization().as_deref(), Some("Bearer t0k3n"));
    }

    #[test]
    fn test_from_lookup_without_token_is_unauthenticated() {
        let config = PolyaxonConfig::from_lookup(|name| {
            (name == ENV_HOST).then(|| "https://polyaxon.example.com".to_string())
        })
        .unwrap();
        assert!(config.authorization().is_none());
    }

    #[test]
    fn test_from_lookup_requires_host() {
        let result = PolyaxonConfig::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: ENV_HOST })
        ));
    }
}
