//! The conversion contract every typed model implements.

use serde_json::Value;

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, JsonKind};

/// How field type mismatches are handled while decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    /// Keep the raw value in the model's passthrough and continue.
    #[default]
    Lenient,
    /// Fail with [`DecodeError::TypeMismatch`].
    Strict,
}

/// A schema-derived record with bidirectional JSON conversion.
///
/// Implementors provide [`Model::decode`] and [`Model::encode`], which read
/// and write fields one by one through [`FieldDecoder`] and [`FieldEncoder`].
/// The provided methods handle the outer JSON plumbing.
///
/// # Example
///
/// ```rust
/// use polyaxon_api::models::{Model, V1ConnectionResponse};
/// use serde_json::json;
///
/// let connection = V1ConnectionResponse::from_json(&json!({
///     "uuid": "u1",
///     "name": "conn1",
///     "unknown": true
/// }))
/// .unwrap();
///
/// assert_eq!(connection.uuid.as_deref(), Some("u1"));
/// assert_eq!(connection.to_json(), json!({"uuid": "u1", "name": "conn1"}));
/// ```
pub trait Model: Sized {
    /// The schema name, used in error messages.
    const NAME: &'static str;

    /// Reads this model's fields from a decoder positioned on its object.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when a field cannot be converted under the
    /// decoder's mode.
    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError>;

    /// Writes the fields that are set into an encoder.
    fn encode(&self, fields: &mut FieldEncoder);

    /// Decodes from a JSON value in [`DecodeMode::Lenient`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] if `value` is not an object, or
    /// any error raised by [`Model::decode`].
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        Self::from_json_with(value, DecodeMode::default())
    }

    /// Decodes from a JSON value using the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotAnObject`] if `value` is not an object, or
    /// any error raised by [`Model::decode`].
    fn from_json_with(value: &Value, mode: DecodeMode) -> Result<Self, DecodeError> {
        let Value::Object(object) = value else {
            return Err(DecodeError::NotAnObject {
                model: Self::NAME,
                found: JsonKind::of(value),
            });
        };
        let mut fields = FieldDecoder::new(Self::NAME, object, mode);
        Self::decode(&mut fields)
    }

    /// Parses JSON text and decodes it using the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidJson`] if the text is not valid JSON,
    /// or any error from [`Model::from_json_with`].
    fn from_json_str(text: &str, mode: DecodeMode) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_with(&value, mode)
    }

    /// Encodes into a JSON object containing exactly the set fields.
    fn to_json(&self) -> Value {
        let mut fields = FieldEncoder::new();
        self.encode(&mut fields);
        fields.finish()
    }
}
