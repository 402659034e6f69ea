//! Typed models for Polyaxon API resources.
//!
//! Every model implements [`Model`], which converts to and from
//! `serde_json::Value`. Conversion follows a fixed contract:
//!
//! - unknown keys are ignored on decode
//! - fields absent from the JSON stay `None`, and `None` fields are never
//!   emitted (no `null` placeholders)
//! - fields set to falsy values (`0`, `""`, `false`, empty lists) are emitted
//! - type mismatches follow the [`DecodeMode`]: lenient decoding (the
//!   default) keeps the raw value in the model's [`Passthrough`] and writes it
//!   back on encode, strict decoding fails with [`DecodeError::TypeMismatch`]
//! - discriminated unions ([`V1Matrix`], [`V1Schedule`]) resolve their `kind`
//!   tag first and fail with [`DecodeError::UnknownVariant`] if it is missing
//!   or unrecognized, in both modes
//!
//! # Example
//!
//! ```rust
//! use polyaxon_api::models::{DecodeMode, Model, V1Matrix};
//! use serde_json::json;
//!
//! let matrix = V1Matrix::from_json_with(
//!     &json!({"kind": "hyperband", "eta": 3, "max_iterations": 81}),
//!     DecodeMode::Strict,
//! )
//! .unwrap();
//!
//! assert_eq!(matrix.kind(), "hyperband");
//! ```

mod connection;
mod errors;
mod event;
mod fields;
mod list;
mod matrix;
mod model;
mod queue;
mod runtime_error;
mod schedule;

pub use connection::{V1ConnectionKind, V1ConnectionResponse};
pub use errors::{DecodeError, JsonKind};
pub use event::{
    LoggedEventListSpec, V1ArtifactKind, V1Event, V1EventArtifact, V1EventAudio, V1EventChart,
    V1EventChartKind, V1EventConfusionMatrix, V1EventCurve, V1EventCurveKind, V1EventDataframe,
    V1EventHistogram, V1EventImage, V1EventModel, V1EventVideo, V1EventsResponse,
};
pub use fields::{FieldDecoder, FieldEncoder, Nullable, Passthrough};
pub use list::{V1ListConnectionsResponse, V1ListQueuesResponse, V1ListResponse};
pub use matrix::{
    V1GridSearch, V1Hyperband, V1Matrix, V1Optimization, V1OptimizationMetric,
    V1OptimizationResource, V1RandomSearch, V1ResourceType,
};
pub use model::{DecodeMode, Model};
pub use queue::V1Queue;
pub use runtime_error::RuntimeError;
pub use schedule::{V1CronSchedule, V1DateTimeSchedule, V1IntervalSchedule, V1Schedule};
