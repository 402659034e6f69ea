//! Tracked event payloads and artifact kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough};

/// The kind of artifact or event a run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum V1ArtifactKind {
    Model,
    Audio,
    Video,
    Histogram,
    Image,
    Tensor,
    Dataframe,
    Chart,
    Csv,
    Tsv,
    Psv,
    Ssv,
    Metric,
    Env,
    Html,
    Text,
    File,
    Dir,
    Dockerfile,
    DockerImage,
    Data,
    Coderef,
    Table,
    Tensorboard,
    Curve,
    Confusion,
    Analysis,
    Iteration,
    Markdown,
    System,
    Artifact,
}

impl V1ArtifactKind {
    /// Returns the wire name of this kind, as used in stream paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Histogram => "histogram",
            Self::Image => "image",
            Self::Tensor => "tensor",
            Self::Dataframe => "dataframe",
            Self::Chart => "chart",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Psv => "psv",
            Self::Ssv => "ssv",
            Self::Metric => "metric",
            Self::Env => "env",
            Self::Html => "html",
            Self::Text => "text",
            Self::File => "file",
            Self::Dir => "dir",
            Self::Dockerfile => "dockerfile",
            Self::DockerImage => "docker_image",
            Self::Data => "data",
            Self::Coderef => "coderef",
            Self::Table => "table",
            Self::Tensorboard => "tensorboard",
            Self::Curve => "curve",
            Self::Confusion => "confusion",
            Self::Analysis => "analysis",
            Self::Iteration => "iteration",
            Self::Markdown => "markdown",
            Self::System => "system",
            Self::Artifact => "artifact",
        }
    }

    /// Events stored as a single file per run.
    #[must_use]
    pub const fn is_single_file_event(self) -> bool {
        matches!(
            self,
            Self::Html
                | Self::Text
                | Self::Histogram
                | Self::Chart
                | Self::Confusion
                | Self::Curve
                | Self::Metric
                | Self::System
        )
    }

    /// Events whose payload may be one file or a directory of files.
    #[must_use]
    pub const fn is_single_or_multi_file_event(self) -> bool {
        matches!(
            self,
            Self::Model
                | Self::Dataframe
                | Self::Audio
                | Self::Video
                | Self::Image
                | Self::Csv
                | Self::Tsv
                | Self::Psv
                | Self::Ssv
        )
    }

    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Tensorboard | Self::Dir)
    }

    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::Dockerfile | Self::File | Self::Env)
    }

    #[must_use]
    pub const fn is_file_or_dir(self) -> bool {
        matches!(self, Self::Data | Self::Model)
    }
}

impl std::fmt::Display for V1ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The family of a logged curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum V1EventCurveKind {
    Roc,
    Pr,
    Custom,
}

/// A logged curve: paired `x`/`y` series with an optional annotation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventCurve {
    pub kind: Option<V1EventCurveKind>,
    pub x: Option<Vec<f64>>,
    pub y: Option<Vec<f64>>,
    pub annotation: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventCurve {
    const NAME: &'static str = "V1EventCurve";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            kind: fields.value("kind")?,
            x: fields.value("x")?,
            y: fields.value("y")?,
            annotation: fields.value("annotation")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("kind", self.kind.as_ref());
        fields.value("x", self.x.as_ref());
        fields.value("y", self.y.as_ref());
        fields.value("annotation", self.annotation.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// A logged image, stored as a file under the run's artifacts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventImage {
    pub height: Option<i32>,
    pub width: Option<i32>,
    pub colorspace: Option<i32>,
    pub path: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventImage {
    const NAME: &'static str = "V1EventImage";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            height: fields.value("height")?,
            width: fields.value("width")?,
            colorspace: fields.value("colorspace")?,
            path: fields.value("path")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("height", self.height.as_ref());
        fields.value("width", self.width.as_ref());
        fields.value("colorspace", self.colorspace.as_ref());
        fields.value("path", self.path.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventVideo {
    pub height: Option<i32>,
    pub width: Option<i32>,
    pub colorspace: Option<i32>,
    pub path: Option<String>,
    pub content_type: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventVideo {
    const NAME: &'static str = "V1EventVideo";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            height: fields.value("height")?,
            width: fields.value("width")?,
            colorspace: fields.value("colorspace")?,
            path: fields.value("path")?,
            content_type: fields.value("content_type")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("height", self.height.as_ref());
        fields.value("width", self.width.as_ref());
        fields.value("colorspace", self.colorspace.as_ref());
        fields.value("path", self.path.as_ref());
        fields.value("content_type", self.content_type.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventAudio {
    pub sample_rate: Option<f64>,
    pub num_channels: Option<i32>,
    pub length_frames: Option<i64>,
    pub path: Option<String>,
    pub content_type: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventAudio {
    const NAME: &'static str = "V1EventAudio";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            sample_rate: fields.value("sample_rate")?,
            num_channels: fields.value("num_channels")?,
            length_frames: fields.value("length_frames")?,
            path: fields.value("path")?,
            content_type: fields.value("content_type")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("sample_rate", self.sample_rate.as_ref());
        fields.value("num_channels", self.num_channels.as_ref());
        fields.value("length_frames", self.length_frames.as_ref());
        fields.value("path", self.path.as_ref());
        fields.value("content_type", self.content_type.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventDataframe {
    pub path: Option<String>,
    pub content_type: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventDataframe {
    const NAME: &'static str = "V1EventDataframe";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            path: fields.value("path")?,
            content_type: fields.value("content_type")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("path", self.path.as_ref());
        fields.value("content_type", self.content_type.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Histogram buckets: `values[i]` was seen `counts[i]` times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventHistogram {
    pub values: Option<Vec<f64>>,
    pub counts: Option<Vec<f64>>,
    pub passthrough: Passthrough,
}

impl Model for V1EventHistogram {
    const NAME: &'static str = "V1EventHistogram";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            values: fields.value("values")?,
            counts: fields.value("counts")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("values", self.values.as_ref());
        fields.value("counts", self.counts.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// The plotting library a chart figure targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum V1EventChartKind {
    Plotly,
    Bokeh,
    Vega,
}

/// A chart; `figure` is the library's own JSON document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventChart {
    pub kind: Option<V1EventChartKind>,
    pub figure: Option<Map<String, Value>>,
    pub passthrough: Passthrough,
}

impl Model for V1EventChart {
    const NAME: &'static str = "V1EventChart";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            kind: fields.value("kind")?,
            figure: fields.value("figure")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("kind", self.kind.as_ref());
        fields.value("figure", self.figure.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// A confusion matrix. Axis labels may be strings or numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventConfusionMatrix {
    pub x: Option<Vec<Value>>,
    pub y: Option<Vec<Value>>,
    pub z: Option<Vec<Value>>,
    pub passthrough: Passthrough,
}

impl Model for V1EventConfusionMatrix {
    const NAME: &'static str = "V1EventConfusionMatrix";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            x: fields.value("x")?,
            y: fields.value("y")?,
            z: fields.value("z")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("x", self.x.as_ref());
        fields.value("y", self.y.as_ref());
        fields.value("z", self.z.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventArtifact {
    pub kind: Option<V1ArtifactKind>,
    pub path: Option<String>,
    pub passthrough: Passthrough,
}

impl Model for V1EventArtifact {
    const NAME: &'static str = "V1EventArtifact";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            kind: fields.value("kind")?,
            path: fields.value("path")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("kind", self.kind.as_ref());
        fields.value("path", self.path.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// A logged model checkpoint and the framework that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventModel {
    pub framework: Option<String>,
    pub path: Option<String>,
    pub spec: Option<Map<String, Value>>,
    pub passthrough: Passthrough,
}

impl Model for V1EventModel {
    const NAME: &'static str = "V1EventModel";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            framework: fields.value("framework")?,
            path: fields.value("path")?,
            spec: fields.value("spec")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("framework", self.framework.as_ref());
        fields.value("path", self.path.as_ref());
        fields.value("spec", self.spec.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// One tracked event.
///
/// An event carries its step and timestamp plus exactly one payload field,
/// matching the kind of the list it was logged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1Event {
    pub timestamp: Option<DateTime<Utc>>,
    pub step: Option<i64>,
    pub metric: Option<f64>,
    pub image: Option<V1EventImage>,
    pub histogram: Option<V1EventHistogram>,
    pub audio: Option<V1EventAudio>,
    pub video: Option<V1EventVideo>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub chart: Option<V1EventChart>,
    pub curve: Option<V1EventCurve>,
    pub confusion: Option<V1EventConfusionMatrix>,
    pub artifact: Option<V1EventArtifact>,
    pub model: Option<V1EventModel>,
    pub dataframe: Option<V1EventDataframe>,
    pub passthrough: Passthrough,
}

impl Model for V1Event {
    const NAME: &'static str = "V1Event";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            timestamp: fields.value("timestamp")?,
            step: fields.value("step")?,
            metric: fields.value("metric")?,
            image: fields.model("image")?,
            histogram: fields.model("histogram")?,
            audio: fields.model("audio")?,
            video: fields.model("video")?,
            html: fields.value("html")?,
            text: fields.value("text")?,
            chart: fields.model("chart")?,
            curve: fields.model("curve")?,
            confusion: fields.model("confusion")?,
            artifact: fields.model("artifact")?,
            model: fields.model("model")?,
            dataframe: fields.model("dataframe")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("timestamp", self.timestamp.as_ref());
        fields.value("step", self.step.as_ref());
        fields.value("metric", self.metric.as_ref());
        fields.model("image", self.image.as_ref());
        fields.model("histogram", self.histogram.as_ref());
        fields.model("audio", self.audio.as_ref());
        fields.model("video", self.video.as_ref());
        fields.value("html", self.html.as_ref());
        fields.value("text", self.text.as_ref());
        fields.model("chart", self.chart.as_ref());
        fields.model("curve", self.curve.as_ref());
        fields.model("confusion", self.confusion.as_ref());
        fields.model("artifact", self.artifact.as_ref());
        fields.model("model", self.model.as_ref());
        fields.model("dataframe", self.dataframe.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// The events of one name and kind, as logged by a single run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoggedEventListSpec {
    pub name: Option<String>,
    pub kind: Option<V1ArtifactKind>,
    pub events: Option<Vec<V1Event>>,
    pub passthrough: Passthrough,
}

impl LoggedEventListSpec {
    /// Returns the events, or an empty slice when none were sent.
    #[must_use]
    pub fn events(&self) -> &[V1Event] {
        self.events.as_deref().unwrap_or_default()
    }
}

impl Model for LoggedEventListSpec {
    const NAME: &'static str = "LoggedEventListSpec";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.value("name")?,
            kind: fields.value("kind")?,
            events: fields.models("events")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.value("name", self.name.as_ref());
        fields.value("kind", self.kind.as_ref());
        fields.models("events", self.events.as_deref());
        fields.passthrough(&self.passthrough);
    }
}

/// Events returned by the streams service, one list per run and name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1EventsResponse {
    pub data: Option<Vec<LoggedEventListSpec>>,
    pub passthrough: Passthrough,
}

impl V1EventsResponse {
    #[must_use]
    pub fn lists(&self) -> &[LoggedEventListSpec] {
        self.data.as_deref().unwrap_or_default()
    }
}

impl Model for V1EventsResponse {
    const NAME: &'static str = "V1EventsResponse";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            data: fields.models("data")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.models("data", self.data.as_deref());
        fields.passthrough(&self.passthrough);
    }
}
