//! Operation descriptors and path template substitution.
//!
//! Every resource client method is described by a constant [`Operation`]:
//! its snake_case name (used in errors and logs), HTTP method and path
//! template. Templates use `{name}` placeholders, and names may contain
//! dots (`{connection.uuid}`).
//!
//! # Example
//!
//! ```rust
//! use polyaxon_api::apis::{build_path, Operation};
//! use polyaxon_api::clients::HttpMethod;
//!
//! const GET_CONNECTION: Operation = Operation::new(
//!     "get_connection",
//!     HttpMethod::Get,
//!     "/api/v1/orgs/{owner}/connections/{uuid}",
//! );
//!
//! let path = build_path(GET_CONNECTION.template, &[("owner", "acme"), ("uuid", "a/b?c")]).unwrap();
//! assert_eq!(path, "/api/v1/orgs/acme/connections/a%2Fb%3Fc");
//! ```

use crate::clients::{HttpMethod, InvalidHttpRequestError};

/// A REST operation: name, method and path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// The snake_case operation id, e.g. `create_connection`.
    pub name: &'static str,
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The path template with `{name}` placeholders.
    pub template: &'static str,
}

impl Operation {
    /// Creates a new `Operation`.
    ///
    /// This is a `const fn` so operations can be defined as constants.
    #[must_use]
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        template: &'static str,
    ) -> Self {
        Self {
            name,
            http_method,
            template,
        }
    }
}

/// Substitutes placeholders with percent-encoded parameter values.
///
/// Every character outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is
/// encoded, so a value can never introduce a path separator, query or
/// fragment. Values that are not placeholders in the template are ignored.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::UnresolvedPlaceholder`] if the template
/// names a placeholder with no value.
pub fn build_path(
    template: &str,
    params: &[(&str, &str)],
) -> Result<String, InvalidHttpRequestError> {
    let mut result = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unbalanced brace: keep the remainder literally
            result.push_str(&rest[open..]);
            return Ok(result);
        };

        let name = &after[..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| InvalidHttpRequestError::UnresolvedPlaceholder {
                template: template.to_string(),
                placeholder: name.to_string(),
            })?;
        result.push_str(&urlencoding::encode(value));

        rest = &after[close + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Operation>();
};
