//! Connection resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Nullable, Passthrough};

/// The backend type of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum V1ConnectionKind {
    HostPath,
    VolumeClaim,
    Gcs,
    S3,
    Wasb,
    Registry,
    Git,
    Aws,
    Gcp,
    Azure,
    Mysql,
    Postgres,
    Oracle,
    Vertica,
    Sqlite,
    Mssql,
    Redis,
    Presto,
    Mongo,
    Cassandra,
    Ftp,
    Grpc,
    Hdfs,
    Http,
    PigCli,
    HiveCli,
    Slack,
    Discord,
    Mattermost,
    Pagerduty,
    Hipchat,
    Webhook,
    Custom,
}

/// A connection as returned by (and sent to) the connections endpoints.
///
/// `description` is nullable: `Some(Nullable::Null)` sends an explicit
/// `null`, which a PATCH uses to clear the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1ConnectionResponse {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub agent: Option<String>,
    pub description: Option<Nullable<String>>,
    pub tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub live_state: Option<i32>,
    pub kind: Option<V1ConnectionKind>,
    /// Raw values of fields that did not match their declared type.
    pub passthrough: Passthrough,
}

impl V1ConnectionResponse {
    /// Creates a connection body carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Model for V1ConnectionResponse {
    const NAME: &'static str = "V1ConnectionResponse";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            uuid: fields.value("uuid")?,
            name: fields.value("name")?,
            agent: fields.value("agent")?,
            description: fields.nullable("description")?,
            tags: fields.value("tags")?,
            created_at: fields.value("created_at")?,
            updated_at: fields.value("updated_at")?,
            live_state: fields.value("live_state")?,
            kind: fields.value("kind")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("uuid", self.uuid.as_ref());
        fields.value("name", self.name.as_ref());
        fields.value("agent", self.agent.as_ref());
        fields.nullable("description", self.description.as_ref());
        fields.value("tags", self.tags.as_ref());
        fields.value("created_at", self.created_at.as_ref());
        fields.value("updated_at", self.updated_at.as_ref());
        fields.value("live_state", self.live_state.as_ref());
        fields.value("kind", self.kind.as_ref());
        fields.passthrough(&self.passthrough);
    }
}
