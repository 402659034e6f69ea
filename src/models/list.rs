//! Paginated list responses.

use crate::models::{
    DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough, V1ConnectionResponse, V1Queue,
};

/// One page of a list endpoint.
///
/// `previous` and `next` are opaque cursors. They are kept verbatim so
/// they can be sent back as query parameters on the following call.
#[derive(Clone, Debug, PartialEq)]
pub struct V1ListResponse<T> {
    pub count: Option<i64>,
    pub results: Option<Vec<T>>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub passthrough: Passthrough,
}

/// A page of connections.
pub type V1ListConnectionsResponse = V1ListResponse<V1ConnectionResponse>;

/// A page of queues.
pub type V1ListQueuesResponse = V1ListResponse<V1Queue>;

impl<T> Default for V1ListResponse<T> {
    fn default() -> Self {
        Self {
            count: None,
            results: None,
            previous: None,
            next: None,
            passthrough: Passthrough::default(),
        }
    }
}

impl<T> V1ListResponse<T> {
    /// Returns `true` if the server reported a following page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }

    /// Returns the cursor for the following page, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }

    /// Returns the results on this page, empty if none were sent.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.results.as_deref().unwrap_or_default()
    }
}

impl<T: Model> Model for V1ListResponse<T> {
    const NAME: &'static str = "V1ListResponse";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            count: fields.value("count")?,
            results: fields.models("results")?,
            previous: fields.value("previous")?,
            next: fields.value("next")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("count", self.count.as_ref());
        fields.models("results", self.results.as_deref());
        fields.value("previous", self.previous.as_ref());
        fields.value("next", self.next.as_ref());
        fields.passthrough(&self.passthrough);
    }
}
