//! The structured error body returned with non-2xx responses.

use serde_json::Value;

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough};

/// A gateway error body: `{"error", "code", "message", "details"}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeError {
    pub error: Option<String>,
    pub code: Option<i32>,
    pub message: Option<String>,
    pub details: Option<Vec<Value>>,
    pub passthrough: Passthrough,
}

impl RuntimeError {
    /// Returns the most descriptive message available.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.is_empty()))
    }
}

impl Model for RuntimeError {
    const NAME: &'static str = "RuntimeError";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            error: fields.value("error")?,
            code: fields.value("code")?,
            message: fields.value("message")?,
            details: fields.value("details")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("error", self.error.as_ref());
        fields.value("code", self.code.as_ref());
        fields.value("message", self.message.as_ref());
        fields.value("details", self.details.as_ref());
        fields.passthrough(&self.passthrough);
    }
}
