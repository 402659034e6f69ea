//! Run schedules and the `V1Schedule` union.

use chrono::{DateTime, Utc};

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough};

const KIND: &str = "kind";

/// Repeats a run every `frequency` seconds. Tagged `kind: "interval"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1IntervalSchedule {
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub frequency: Option<i32>,
    pub depends_on_past: Option<bool>,
    pub passthrough: Passthrough,
}

impl V1IntervalSchedule {
    pub const KIND: &'static str = "interval";
}

impl Model for V1IntervalSchedule {
    const NAME: &'static str = "V1IntervalSchedule";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            start_at: fields.value("start_at")?,
            end_at: fields.value("end_at")?,
            frequency: fields.value("frequency")?,
            depends_on_past: fields.value("depends_on_past")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("start_at", self.start_at.as_ref());
        fields.value("end_at", self.end_at.as_ref());
        fields.value("frequency", self.frequency.as_ref());
        fields.value("depends_on_past", self.depends_on_past.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Repeats a run on a cron expression. Tagged `kind: "cron"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1CronSchedule {
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub cron: Option<String>,
    pub depends_on_past: Option<bool>,
    pub passthrough: Passthrough,
}

impl V1CronSchedule {
    pub const KIND: &'static str = "cron";
}

impl Model for V1CronSchedule {
    const NAME: &'static str = "V1CronSchedule";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            start_at: fields.value("start_at")?,
            end_at: fields.value("end_at")?,
            cron: fields.value("cron")?,
            depends_on_past: fields.value("depends_on_past")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("start_at", self.start_at.as_ref());
        fields.value("end_at", self.end_at.as_ref());
        fields.value("cron", self.cron.as_ref());
        fields.value("depends_on_past", self.depends_on_past.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Runs once at a fixed time. Tagged `kind: "datetime"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1DateTimeSchedule {
    pub start_at: Option<DateTime<Utc>>,
    pub passthrough: Passthrough,
}

impl V1DateTimeSchedule {
    pub const KIND: &'static str = "datetime";
}

impl Model for V1DateTimeSchedule {
    const NAME: &'static str = "V1DateTimeSchedule";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            start_at: fields.value("start_at")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("start_at", self.start_at.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// A schedule, discriminated by its `kind` tag.
#[derive(Clone, Debug, PartialEq)]
pub enum V1Schedule {
    Interval(V1IntervalSchedule),
    Cron(V1CronSchedule),
    DateTime(V1DateTimeSchedule),
}

impl V1Schedule {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Interval(_) => V1IntervalSchedule::KIND,
            Self::Cron(_) => V1CronSchedule::KIND,
            Self::DateTime(_) => V1DateTimeSchedule::KIND,
        }
    }
}

impl Model for V1Schedule {
    const NAME: &'static str = "V1Schedule";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        match fields.tag(KIND) {
            Some(V1IntervalSchedule::KIND) => {
                V1IntervalSchedule::decode(&mut fields.for_variant(V1IntervalSchedule::NAME))
                    .map(Self::Interval)
            }
            Some(V1CronSchedule::KIND) => {
                V1CronSchedule::decode(&mut fields.for_variant(V1CronSchedule::NAME))
                    .map(Self::Cron)
            }
            Some(V1DateTimeSchedule::KIND) => {
                V1DateTimeSchedule::decode(&mut fields.for_variant(V1DateTimeSchedule::NAME))
                    .map(Self::DateTime)
            }
            other => Err(DecodeError::UnknownVariant {
                model: Self::NAME,
                tag_field: KIND,
                tag: other.map(ToString::to_string),
            }),
        }
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        match self {
            Self::Interval(inner) => inner.encode(fields),
            Self::Cron(inner) => inner.encode(fields),
            Self::DateTime(inner) => inner.encode(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DecodeMode;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_interval_schedule_fields() {
        let json = json!({
            "kind": "interval",
            "start_at": "2024-05-01T00:00:00Z",
            "frequency": 3600,
            "depends_on_past": false
        });
        let schedule = V1IntervalSchedule::from_json_with(&json, DecodeMode::Strict).unwrap();

        assert_eq!(
            schedule.start_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert!(schedule.end_at.is_none());
        assert_eq!(schedule.frequency, Some(3600));
        assert_eq!(schedule.depends_on_past, Some(false));
        assert_eq!(schedule.to_json(), json);
    }

    #[test]
    fn test_bad_timestamp_lenient_and_strict() {
        let json = json!({"kind": "interval", "end_at": "tomorrow"});

        let schedule = V1IntervalSchedule::from_json(&json).unwrap();
        assert!(schedule.end_at.is_none());
        assert_eq!(schedule.to_json(), json);

        let error = V1IntervalSchedule::from_json_with(&json, DecodeMode::Strict).unwrap_err();
        assert_eq!(error.field(), Some("end_at"));
    }

    #[test]
    fn test_schedule_union_variants() {
        let cron = V1Schedule::from_json(&json!({"kind": "cron", "cron": "0 * * * *"})).unwrap();
        assert_eq!(cron.kind(), "cron");
        assert!(matches!(cron, V1Schedule::Cron(ref c) if c.cron.as_deref() == Some("0 * * * *")));

        let once = V1Schedule::from_json(&json!({"kind": "datetime"})).unwrap();
        assert_eq!(once, V1Schedule::DateTime(V1DateTimeSchedule::default()));
        assert_eq!(once.to_json(), json!({"kind": "datetime"}));
    }

    #[test]
    fn test_schedule_union_rejects_unknown_kind() {
        let error = V1Schedule::from_json(&json!({"kind": "exact_time"})).unwrap_err();
        assert!(matches!(error, DecodeError::UnknownVariant { model: "V1Schedule", .. }));
    }

    #[test]
    fn test_schedule_union_round_trip_per_variant() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let schedules = [
            V1Schedule::Interval(V1IntervalSchedule {
                start_at: Some(start),
                frequency: Some(0),
                depends_on_past: Some(false),
                ..V1IntervalSchedule::default()
            }),
            V1Schedule::Cron(V1CronSchedule {
                end_at: Some(start),
                cron: Some(String::new()),
                depends_on_past: Some(false),
                ..V1CronSchedule::default()
            }),
            V1Schedule::DateTime(V1DateTimeSchedule {
                start_at: Some(start),
                passthrough: Passthrough::default(),
            }),
        ];

        for schedule in schedules {
            let json = schedule.to_json();
            assert_eq!(json["kind"], schedule.kind());
            assert_eq!(
                V1Schedule::from_json_with(&json, DecodeMode::Strict).unwrap(),
                schedule
            );
        }
    }
}
