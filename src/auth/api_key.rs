//! API-key credential providers.
//!
//! A provider is asked for a header value by scheme name (always
//! `"Authorization"` for the Polyaxon API) and its answer is sent verbatim.

use std::fmt;

use crate::config::ApiKey;

/// Supplies the value of an API-key header.
///
/// Implemented for [`StaticApiKey`] and for any
/// `Fn(&str) -> String + Send + Sync` closure, which makes rotating tokens
/// easy to plug in.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::ApiKeyProvider;
///
/// let provider = |name: &str| format!("Bearer from-{name}");
/// assert_eq!(provider.api_key("Authorization"), "Bearer from-Authorization");
/// ```
pub trait ApiKeyProvider: Send + Sync {
    /// Returns the header value for the given scheme name.
    fn api_key(&self, name: &str) -> String;
}

impl<F> ApiKeyProvider for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn api_key(&self, name: &str) -> String {
        self(name)
    }
}

/// A fixed token sent as `"<prefix> <token>"`.
///
/// The prefix defaults to `"token"`, matching the Polyaxon CLI.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticApiKey {
    key: ApiKey,
    prefix: String,
}

impl StaticApiKey {
    /// The prefix used when none is configured.
    pub const DEFAULT_PREFIX: &'static str = "token";

    /// Creates a provider with the default prefix.
    #[must_use]
    pub fn new(key: ApiKey) -> Self {
        Self::with_prefix(key, Self::DEFAULT_PREFIX)
    }

    /// Creates a provider with a custom prefix. An empty prefix sends the
    /// bare token.
    #[must_use]
    pub fn with_prefix(key: ApiKey, prefix: impl Into<String>) -> Self {
        Self {
            key,
            prefix: prefix.into(),
        }
    }

    /// Returns the configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl ApiKeyProvider for StaticApiKey {
    fn api_key(&self, _name: &str) -> String {
        if self.prefix.is_empty() {
            self.key.as_ref().to_string()
        } else {
            format!("{} {}", self.prefix, self.key.as_ref())
        }
    }
}

impl fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticApiKey")
            .field("key", &self.key)
            .field("prefix", &self.prefix)
            .finish()
    }
}
