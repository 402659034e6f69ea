//! Agent queues.

use chrono::{DateTime, Utc};

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough};

/// A scheduling queue attached to an agent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1Queue {
    pub uuid: Option<String>,
    pub agent: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub priority: Option<i32>,
    pub concurrency: Option<i32>,
    pub resource: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub passthrough: Passthrough,
}

impl Model for V1Queue {
    const NAME: &'static str = "V1Queue";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            uuid: fields.value("uuid")?,
            agent: fields.value("agent")?,
            name: fields.value("name")?,
            description: fields.value("description")?,
            tags: fields.value("tags")?,
            priority: fields.value("priority")?,
            concurrency: fields.value("concurrency")?,
            resource: fields.value("resource")?,
            created_at: fields.value("created_at")?,
            updated_at: fields.value("updated_at")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("uuid", self.uuid.as_ref());
        fields.value("agent", self.agent.as_ref());
        fields.value("name", self.name.as_ref());
        fields.value("description", self.description.as_ref());
        fields.value("tags", self.tags.as_ref());
        fields.value("priority", self.priority.as_ref());
        fields.value("concurrency", self.concurrency.as_ref());
        fields.value("resource", self.resource.as_ref());
        fields.value("created_at", self.created_at.as_ref());
        fields.value("updated_at", self.updated_at.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DecodeMode;
    use serde_json::json;

    #[test]
    fn test_falsy_values_are_emitted() {
        let queue = V1Queue {
            name: Some(String::new()),
            priority: Some(0),
            concurrency: Some(0),
            tags: Some(vec![]),
            ..V1Queue::default()
        };

        assert_eq!(
            queue.to_json(),
            json!({"name": "", "priority": 0, "concurrency": 0, "tags": []})
        );
        assert_eq!(V1Queue::from_json(&queue.to_json()).unwrap(), queue);
    }

    #[test]
    fn test_decode_full_queue() {
        let json = json!({
            "uuid": "q1",
            "agent": "a1",
            "name": "gpu",
            "priority": 5,
            "concurrency": 2,
            "resource": "nvidia.com/gpu",
            "created_at": "2024-03-01T00:00:00Z"
        });
        let queue = V1Queue::from_json_with(&json, DecodeMode::Strict).unwrap();

        assert_eq!(queue.name.as_deref(), Some("gpu"));
        assert_eq!(queue.priority, Some(5));
        assert_eq!(queue.concurrency, Some(2));
        assert!(queue.description.is_none());
        assert_eq!(queue.to_json(), json);
    }

    #[test]
    fn test_priority_out_of_range_is_a_mismatch() {
        let json = json!({"priority": 4_294_967_296_i64});

        let queue = V1Queue::from_json(&json).unwrap();
        assert!(queue.priority.is_none());
        assert_eq!(queue.passthrough.get("priority"), Some(&json!(4_294_967_296_i64)));

        assert!(V1Queue::from_json_with(&json, DecodeMode::Strict).is_err());
    }
}
