//! Field-level JSON conversion used by every model.
//!
//! [`FieldDecoder`] walks one JSON object and hands back typed fields;
//! [`FieldEncoder`] builds the object back up, emitting only fields that
//! are set. Both are driven by each model's [`Model`] implementation.
//!
//! # Decode policy
//!
//! - An absent key, or a `null` for a non-nullable field, leaves the field unset.
//! - Unknown keys are ignored.
//! - A value of the wrong JSON kind is a mismatch. In [`DecodeMode::Strict`]
//!   the decode fails with [`DecodeError::TypeMismatch`]. In
//!   [`DecodeMode::Lenient`] the field stays unset and the raw value is kept
//!   in the model's [`Passthrough`], which the encoder writes back verbatim.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{DecodeError, DecodeMode, JsonKind, Model};

/// A value that may be explicitly `null` on the wire.
///
/// Used as `Option<Nullable<T>>` where the schema distinguishes an absent
/// key from an explicit `null` (for example, clearing a field in a PATCH).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The key was present with a `null` value.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if this is an explicit `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns a reference to the value, if not `null`.
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Converts into an `Option`, collapsing `null` to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Raw JSON values of known fields that failed to convert in lenient mode.
///
/// Keys are the wire names of the fields. The encoder re-emits these values
/// unchanged, so a lenient decode followed by an encode loses nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Passthrough(Map<String, Value>);

impl Passthrough {
    /// Returns `true` if no field was passed through.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of passed-through fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the raw value kept for a field, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates over the passed-through fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }
}

/// Reads typed fields out of one JSON object.
#[derive(Debug)]
pub struct FieldDecoder<'a> {
    model: &'static str,
    object: &'a Map<String, Value>,
    mode: DecodeMode,
    passthrough: Passthrough,
}

impl<'a> FieldDecoder<'a> {
    /// Creates a decoder over `object` on behalf of `model`.
    #[must_use]
    pub fn new(model: &'static str, object: &'a Map<String, Value>, mode: DecodeMode) -> Self {
        Self {
            model,
            object,
            mode,
            passthrough: Passthrough::default(),
        }
    }

    /// Returns a fresh decoder over the same object for a union variant.
    ///
    /// Errors raised by the variant then name the variant model.
    #[must_use]
    pub fn for_variant(&self, model: &'static str) -> FieldDecoder<'a> {
        FieldDecoder::new(model, self.object, self.mode)
    }

    /// Returns the decode mode in effect.
    #[must_use]
    pub const fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Returns the string value of a tag field, if present.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&'a str> {
        self.object.get(key).and_then(Value::as_str)
    }

    /// Verifies that a tag field, when present, carries the expected value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownVariant`] if the tag is present and differs.
    pub fn check_tag(&self, key: &'static str, expected: &str) -> Result<(), DecodeError> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(tag)) if tag == expected => Ok(()),
            Some(other) => Err(DecodeError::UnknownVariant {
                model: self.model,
                tag_field: key,
                tag: other.as_str().map(ToString::to_string),
            }),
        }
    }

    /// Reads an optional primitive, enum, timestamp, list or map field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] in strict mode when the value
    /// does not convert to `T`.
    pub fn value<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, DecodeError> {
        let Some(raw) = self.present(key) else {
            return Ok(None);
        };
        match serde_json::from_value::<T>(raw.clone()) {
            Ok(value) => Ok(Some(value)),
            Err(_) => self.mismatch(key, raw, type_name::<T>()).map(|()| None),
        }
    }

    /// Reads a field the schema marks as required.
    ///
    /// A required field cannot be passed through, so a mismatch fails in
    /// both modes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingField`] if absent or `null`, and
    /// [`DecodeError::TypeMismatch`] if the value does not convert.
    pub fn required<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, DecodeError> {
        let raw = self.present(key).ok_or_else(|| DecodeError::MissingField {
            model: self.model,
            field: key.to_string(),
        })?;
        serde_json::from_value::<T>(raw.clone()).map_err(|_| DecodeError::TypeMismatch {
            model: self.model,
            field: key.to_string(),
            expected: type_name::<T>(),
            found: JsonKind::of(raw),
        })
    }

    /// Reads a field that distinguishes explicit `null` from absence.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] in strict mode when a non-null
    /// value does not convert to `T`.
    pub fn nullable<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<Nullable<T>>, DecodeError> {
        match self.object.get(key) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(Nullable::Null)),
            Some(_) => Ok(self.value::<T>(key)?.map(Nullable::Value)),
        }
    }

    /// Reads a nested model field.
    ///
    /// # Errors
    ///
    /// Propagates the nested model's errors with the field path prefixed,
    /// and returns [`DecodeError::TypeMismatch`] in strict mode when the
    /// value is not an object.
    pub fn model<M: Model>(&mut self, key: &str) -> Result<Option<M>, DecodeError> {
        let Some(raw) = self.present(key) else {
            return Ok(None);
        };
        let Value::Object(object) = raw else {
            return self.mismatch(key, raw, M::NAME).map(|()| None);
        };
        let mut nested = FieldDecoder::new(M::NAME, object, self.mode);
        M::decode(&mut nested).map(Some).map_err(|e| e.within(key))
    }

    /// Reads a list-of-models field, decoding element-wise.
    ///
    /// In lenient mode a non-object element moves the whole raw list into
    /// the passthrough.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] in strict mode naming the
    /// offending element, and propagates element decode errors.
    pub fn models<M: Model>(&mut self, key: &str) -> Result<Option<Vec<M>>, DecodeError> {
        let Some(raw) = self.present(key) else {
            return Ok(None);
        };
        let Value::Array(items) = raw else {
            return self.mismatch(key, raw, type_name::<Vec<M>>()).map(|()| None);
        };

        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Value::Object(object) = item else {
                let path = format!("{key}[{index}]");
                return match self.mode {
                    DecodeMode::Strict => Err(DecodeError::TypeMismatch {
                        model: self.model,
                        field: path,
                        expected: M::NAME,
                        found: JsonKind::of(item),
                    }),
                    DecodeMode::Lenient => {
                        self.pass_through(key, raw);
                        Ok(None)
                    }
                };
            };
            let mut nested = FieldDecoder::new(M::NAME, object, self.mode);
            let element =
                M::decode(&mut nested).map_err(|e| e.within(&format!("{key}[{index}]")))?;
            decoded.push(element);
        }
        Ok(Some(decoded))
    }

    /// Takes the fields passed through so far.
    ///
    /// Models call this last, after every field has been read.
    pub fn take_passthrough(&mut self) -> Passthrough {
        std::mem::take(&mut self.passthrough)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    fn mismatch(
        &mut self,
        key: &str,
        raw: &Value,
        expected: &'static str,
    ) -> Result<(), DecodeError> {
        match self.mode {
            DecodeMode::Strict => Err(DecodeError::TypeMismatch {
                model: self.model,
                field: key.to_string(),
                expected,
                found: JsonKind::of(raw),
            }),
            DecodeMode::Lenient => {
                self.pass_through(key, raw);
                Ok(())
            }
        }
    }

    fn pass_through(&mut self, key: &str, raw: &Value) {
        tracing::debug!(
            "Passing through {}.{}: value of kind {} does not match the declared type",
            self.model,
            key,
            JsonKind::of(raw)
        );
        self.passthrough.insert(key, raw.clone());
    }
}

/// Writes the set fields of a model into a JSON object.
#[derive(Debug, Default)]
pub struct FieldEncoder {
    object: Map<String, Value>,
}

impl FieldEncoder {
    /// Creates an empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a discriminant tag.
    pub fn tag(&mut self, key: &str, value: &str) {
        self.object
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Writes an optional field; `None` emits nothing.
    pub fn value<T: Serialize>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.required(key, value);
        }
    }

    /// Writes a field that is always present.
    ///
    /// A value that serializes to `null` (a non-finite float) is dropped;
    /// only [`FieldEncoder::nullable`] writes explicit nulls.
    pub fn required<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(Value::Null) => {
                tracing::warn!("Dropping field {} that serialized to null", key);
            }
            Ok(json) => {
                self.object.insert(key.to_string(), json);
            }
            Err(e) => {
                tracing::warn!("Dropping field {} that failed to serialize: {}", key, e);
            }
        }
    }

    /// Writes a nullable field; `Some(Nullable::Null)` emits `null`.
    pub fn nullable<T: Serialize>(&mut self, key: &str, value: Option<&Nullable<T>>) {
        match value {
            None => {}
            Some(Nullable::Null) => {
                self.object.insert(key.to_string(), Value::Null);
            }
            Some(Nullable::Value(value)) => self.required(key, value),
        }
    }

    /// Writes a nested model field.
    pub fn model<M: Model>(&mut self, key: &str, value: Option<&M>) {
        if let Some(value) = value {
            self.object.insert(key.to_string(), value.to_json());
        }
    }

    /// Writes a list-of-models field element-wise.
    pub fn models<M: Model>(&mut self, key: &str, value: Option<&[M]>) {
        if let Some(items) = value {
            let items = items.iter().map(Model::to_json).collect();
            self.object.insert(key.to_string(), Value::Array(items));
        }
    }

    /// Re-emits passed-through raw values for keys not already written.
    pub fn passthrough(&mut self, passthrough: &Passthrough) {
        for (key, value) in passthrough.iter() {
            self.object
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Finishes encoding and returns the JSON object.
    #[must_use]
    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}
