//! Decode errors for the model layer.
//!
//! Every failure carries the model name and, where one exists, the dotted
//! field path (`resource.name`, `results[2].uuid`) of the offending value.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The kind of a JSON value, used in mismatch diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl JsonKind {
    /// Returns the kind of the given value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a JSON value cannot be converted into a model.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::models::{DecodeError, JsonKind};
///
/// let error = DecodeError::TypeMismatch {
///     model: "V1Hyperband",
///     field: "eta".to_string(),
///     expected: "f64",
///     found: JsonKind::String,
/// };
/// assert!(error.to_string().contains("V1Hyperband.eta"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A field held a JSON value of the wrong kind for its declared type.
    #[error("Type mismatch at {model}.{field}: expected {}, found {found}.", short_type_name(.expected))]
    TypeMismatch {
        /// The model being decoded.
        model: &'static str,
        /// Path of the field within the model.
        field: String,
        /// Name of the declared type.
        expected: &'static str,
        /// Kind of the JSON value that was found.
        found: JsonKind,
    },

    /// A discriminated union carried a missing or unrecognized tag.
    #[error("Unknown variant for {model}: {tag_field} = {}.", display_tag(.tag.as_deref()))]
    UnknownVariant {
        /// The union (or variant) model being decoded.
        model: &'static str,
        /// Name of the tag field, usually `kind`.
        tag_field: &'static str,
        /// The tag value found, `None` when absent or not a string.
        tag: Option<String>,
    },

    /// The value handed to `from_json` was not a JSON object.
    #[error("Cannot decode {model} from a JSON {found}; expected an object.")]
    NotAnObject {
        /// The model being decoded.
        model: &'static str,
        /// Kind of the JSON value that was found.
        found: JsonKind,
    },

    /// A field the schema marks as required was absent.
    #[error("Missing required field {model}.{field}.")]
    MissingField {
        /// The model being decoded.
        model: &'static str,
        /// Path of the missing field.
        field: String,
    },

    /// The response body was not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Strips module paths from a `std::any::type_name` string.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(last_segment(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&segment));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

fn display_tag(tag: Option<&str>) -> String {
    tag.map_or_else(|| "<missing>".to_string(), |t| format!("'{t}'"))
}

impl DecodeError {
    /// Prefixes the field path of this error with a parent field name.
    ///
    /// Used when a nested model fails, so the reported path starts at the
    /// outermost model.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::TypeMismatch {
                model,
                field,
                expected,
                found,
            } => Self::TypeMismatch {
                model,
                field: join_path(parent, &field),
                expected,
                found,
            },
            Self::MissingField { model, field } => Self::MissingField {
                model,
                field: join_path(parent, &field),
            },
            other => other,
        }
    }

    /// Returns the field path this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { field, .. } | Self::MissingField { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('[') {
        format!("{parent}{child}")
    } else {
        format!("{parent}.{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind_of_each_value() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_type_mismatch_message_names_model_and_field() {
        let error = DecodeError::TypeMismatch {
            model: "V1Queue",
            field: "priority".to_string(),
            expected: "i32",
            found: JsonKind::String,
        };
        let message = error.to_string();
        assert!(message.contains("V1Queue.priority"));
        assert!(message.contains("expected i32"));
        assert!(message.contains("found string"));
    }

    #[test]
    fn test_short_type_name_strips_module_paths() {
        assert_eq!(short_type_name("i32"), "i32");
        assert_eq!(short_type_name("alloc::vec::Vec<f64>"), "Vec<f64>");
        assert_eq!(
            short_type_name(
                "std::collections::btree::map::BTreeMap<alloc::string::String, serde_json::value::Value>"
            ),
            "BTreeMap<String, Value>"
        );
    }

    #[test]
    fn test_unknown_variant_message_with_and_without_tag() {
        let error = DecodeError::UnknownVariant {
            model: "V1Matrix",
            tag_field: "kind",
            tag: Some("bogus".to_string()),
        };
        assert!(error.to_string().contains("kind = 'bogus'"));

        let error = DecodeError::UnknownVariant {
            model: "V1Matrix",
            tag_field: "kind",
            tag: None,
        };
        assert!(error.to_string().contains("<missing>"));
    }

    #[test]
    fn test_within_prefixes_nested_paths() {
        let error = DecodeError::TypeMismatch {
            model: "V1OptimizationResource",
            field: "name".to_string(),
            expected: "String",
            found: JsonKind::Number,
        }
        .within("resource");
        assert_eq!(error.field(), Some("resource.name"));

        let error = DecodeError::MissingField {
            model: "V1Queue",
            field: "[2].uuid".to_string(),
        }
        .within("results");
        assert_eq!(error.field(), Some("results[2].uuid"));
    }
}
