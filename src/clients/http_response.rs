//! HTTP response types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// A completed HTTP exchange, whatever its status.
///
/// Header names are stored lower-cased; a header may carry several values.
/// The body is kept as raw text and only parsed when a caller decodes it.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, lower-casing header names and parsing `Retry-After`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        let retry_request_after = normalized
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| parse_retry_after(value));

        Self {
            code,
            headers: normalized,
            body: body.into(),
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Deprecation` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("deprecation")
    }

    /// Returns `true` if the response carries a `Deprecation` header.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason().is_some()
    }

    /// Returns `true` if the body is empty or only whitespace.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Parses `Retry-After` as delay-seconds or an HTTP date.
///
/// Dates in the past yield zero.
#[allow(clippy::cast_precision_loss)]
fn parse_retry_after(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<f64>() {
        return (secs.is_finite() && secs >= 0.0).then_some(secs);
    }
    let at = DateTime::parse_from_rfc2822(value).ok()?;
    let wait = at.with_timezone(&Utc) - Utc::now();
    Some((wait.num_milliseconds().max(0) as f64) / 1000.0)
}
