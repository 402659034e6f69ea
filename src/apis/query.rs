//! Query string assembly and required-parameter checks.

use crate::apis::errors::ApiError;

/// How a sequence-valued query parameter is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionFormat {
    /// Comma-separated: `names=a,b`.
    #[default]
    Csv,
    /// Space-separated: `names=a b`.
    Ssv,
    /// Tab-separated.
    Tsv,
    /// Pipe-separated: `names=a|b`.
    Pipes,
    /// One pair per element: `names=a&names=b`.
    Multi,
}

impl CollectionFormat {
    /// Returns the separator, or `None` for [`CollectionFormat::Multi`].
    #[must_use]
    pub const fn separator(self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(","),
            Self::Ssv => Some(" "),
            Self::Tsv => Some("\t"),
            Self::Pipes => Some("|"),
            Self::Multi => None,
        }
    }
}

/// Ordered query parameters for one request.
///
/// Only provided values are added: every setter takes an `Option` and
/// skips `None`. Encoding happens in the transport.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::apis::{CollectionFormat, QueryParams};
///
/// let names = vec!["loss".to_string(), "accuracy".to_string()];
/// let query = QueryParams::new()
///     .push("offset", Some(10))
///     .push("limit", Some(5))
///     .push::<String>("sort", None)
///     .push_list("names", Some(names.as_slice()), CollectionFormat::Csv)
///     .into_pairs();
///
/// assert_eq!(
///     query,
///     vec![
///         ("offset".to_string(), "10".to_string()),
///         ("limit".to_string(), "5".to_string()),
///         ("names".to_string(), "loss,accuracy".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty set of query parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds `key=value` when `value` is provided.
    #[must_use]
    pub fn push<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Adds a sequence parameter in the given collection format.
    ///
    /// An empty sequence is still sent (as an empty value) in the joined
    /// formats, since the caller explicitly provided it.
    #[must_use]
    pub fn push_list<V: ToString>(
        mut self,
        key: &str,
        values: Option<&[V]>,
        format: CollectionFormat,
    ) -> Self {
        let Some(values) = values else {
            return self;
        };
        match format.separator() {
            Some(separator) => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(separator);
                self.pairs.push((key.to_string(), joined));
            }
            None => {
                for value in values {
                    self.pairs.push((key.to_string(), value.to_string()));
                }
            }
        }
        self
    }

    /// Returns `true` if no parameter was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consumes the parameters, returning the ordered pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Returns the value of a required parameter.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] if the value is `None`.
pub fn require<'a, T: ?Sized>(
    operation: &'static str,
    parameter: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, ApiError> {
    value.ok_or(ApiError::MissingParameter {
        operation,
        parameter,
    })
}

/// Returns the value of a required path parameter.
///
/// An empty string counts as missing: substituting it would address a
/// different route.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] if the value is `None` or empty.
pub fn require_path<'a>(
    operation: &'static str,
    parameter: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    require(operation, parameter, value.filter(|value| !value.is_empty()))
}
