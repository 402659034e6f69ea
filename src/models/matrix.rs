//! Hyperparameter search configurations and the `V1Matrix` union.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{DecodeError, FieldDecoder, FieldEncoder, Model, Passthrough};

const KIND: &str = "kind";

/// Direction in which a metric is optimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum V1Optimization {
    Maximize,
    Minimize,
}

/// Numeric type of an optimization resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum V1ResourceType {
    Int,
    Float,
}

/// The metric a search optimizes.
#[derive(Clone, Debug, PartialEq)]
pub struct V1OptimizationMetric {
    /// Metric name; required by the schema.
    pub name: String,
    pub optimization: Option<V1Optimization>,
    pub passthrough: Passthrough,
}

impl V1OptimizationMetric {
    #[must_use]
    pub fn new(name: impl Into<String>, optimization: V1Optimization) -> Self {
        Self {
            name: name.into(),
            optimization: Some(optimization),
            passthrough: Passthrough::default(),
        }
    }
}

impl Model for V1OptimizationMetric {
    const NAME: &'static str = "V1OptimizationMetric";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            optimization: fields.value("optimization")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.required("name", &self.name);
        fields.value("optimization", self.optimization.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// The budget resource Hyperband allocates across brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct V1OptimizationResource {
    /// Resource name; required by the schema.
    pub name: String,
    /// Serialized as `type`.
    pub resource_type: Option<V1ResourceType>,
    pub passthrough: Passthrough,
}

impl V1OptimizationResource {
    #[must_use]
    pub fn new(name: impl Into<String>, resource_type: V1ResourceType) -> Self {
        Self {
            name: name.into(),
            resource_type: Some(resource_type),
            passthrough: Passthrough::default(),
        }
    }
}

impl Model for V1OptimizationResource {
    const NAME: &'static str = "V1OptimizationResource";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            resource_type: fields.value("type")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.required("name", &self.name);
        fields.value("type", self.resource_type.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Hyperband search. Tagged `kind: "hyperband"`.
///
/// `params` and `early_stopping` hold opaque parameter and policy
/// definitions that this client forwards without interpreting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1Hyperband {
    pub params: Option<BTreeMap<String, Value>>,
    pub max_iterations: Option<i32>,
    pub eta: Option<f64>,
    pub resource: Option<V1OptimizationResource>,
    pub metric: Option<V1OptimizationMetric>,
    pub resume: Option<bool>,
    pub seed: Option<i32>,
    pub concurrency: Option<i32>,
    pub early_stopping: Option<Vec<Value>>,
    pub passthrough: Passthrough,
}

impl V1Hyperband {
    pub const KIND: &'static str = "hyperband";
}

impl Model for V1Hyperband {
    const NAME: &'static str = "V1Hyperband";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            params: fields.value("params")?,
            max_iterations: fields.value("max_iterations")?,
            eta: fields.value("eta")?,
            resource: fields.model("resource")?,
            metric: fields.model("metric")?,
            resume: fields.value("resume")?,
            seed: fields.value("seed")?,
            concurrency: fields.value("concurrency")?,
            early_stopping: fields.value("early_stopping")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("params", self.params.as_ref());
        fields.value("max_iterations", self.max_iterations.as_ref());
        fields.value("eta", self.eta.as_ref());
        fields.model("resource", self.resource.as_ref());
        fields.model("metric", self.metric.as_ref());
        fields.value("resume", self.resume.as_ref());
        fields.value("seed", self.seed.as_ref());
        fields.value("concurrency", self.concurrency.as_ref());
        fields.value("early_stopping", self.early_stopping.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Random search. Tagged `kind: "random"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1RandomSearch {
    pub params: Option<BTreeMap<String, Value>>,
    pub num_runs: Option<i32>,
    pub seed: Option<i32>,
    pub concurrency: Option<i32>,
    pub early_stopping: Option<Vec<Value>>,
    pub passthrough: Passthrough,
}

impl V1RandomSearch {
    pub const KIND: &'static str = "random";
}

impl Model for V1RandomSearch {
    const NAME: &'static str = "V1RandomSearch";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            params: fields.value("params")?,
            num_runs: fields.value("num_runs")?,
            seed: fields.value("seed")?,
            concurrency: fields.value("concurrency")?,
            early_stopping: fields.value("early_stopping")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("params", self.params.as_ref());
        fields.value("num_runs", self.num_runs.as_ref());
        fields.value("seed", self.seed.as_ref());
        fields.value("concurrency", self.concurrency.as_ref());
        fields.value("early_stopping", self.early_stopping.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// Grid search. Tagged `kind: "grid"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct V1GridSearch {
    pub params: Option<BTreeMap<String, Value>>,
    pub num_runs: Option<i32>,
    pub concurrency: Option<i32>,
    pub early_stopping: Option<Vec<Value>>,
    pub passthrough: Passthrough,
}

impl V1GridSearch {
    pub const KIND: &'static str = "grid";
}

impl Model for V1GridSearch {
    const NAME: &'static str = "V1GridSearch";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        fields.check_tag(KIND, Self::KIND)?;
        Ok(Self {
            params: fields.value("params")?,
            num_runs: fields.value("num_runs")?,
            concurrency: fields.value("concurrency")?,
            early_stopping: fields.value("early_stopping")?,
            passthrough: fields.take_passthrough(),
        })
    }

    fn encode(&self, fields: &mut FieldEncoder) {
        fields.tag(KIND, Self::KIND);
        fields.value("params", self.params.as_ref());
        fields.value("num_runs", self.num_runs.as_ref());
        fields.value("concurrency", self.concurrency.as_ref());
        fields.value("early_stopping", self.early_stopping.as_ref());
        fields.passthrough(&self.passthrough);
    }
}

/// A search configuration, discriminated by its `kind` tag.
///
/// A missing or unrecognized tag is always a [`DecodeError::UnknownVariant`],
/// in lenient mode too: there is no base representation to fall back to.
#[derive(Clone, Debug, PartialEq)]
pub enum V1Matrix {
    Hyperband(V1Hyperband),
    Random(V1RandomSearch),
    Grid(V1GridSearch),
}

impl V1Matrix {
    /// Returns the wire tag of the active variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Hyperband(_) => V1Hyperband::KIND,
            Self::Random(_) => V1RandomSearch::KIND,
            Self::Grid(_) => V1GridSearch::KIND,
        }
    }
}

impl Model for V1Matrix {
    const NAME: &'static str = "V1Matrix";

    fn decode(fields: &mut FieldDecoder<'_>) -> Result<Self, DecodeError> {
        match fields.tag(KIND) {
            Some(V1Hyperband::KIND) => {
                V1Hyperband::decode(&mut fields.for_variant(V1Hyperband::NAME)).map(Self::Hyperband)
            }
            Some(V1RandomSearch::KIND) => {
                V1RandomSearch::decode(&mut fields.for_variant(V1RandomSearch::NAME))
                    .map(Self::Random)
            }
            Some(V1GridSearch::KIND) => {
                V1GridSearch::decode(&mut fields.for_variant(V1GridSearch::NAME)).map(Self::Grid)
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
            Self::Hyperband(inner) => inner.encode(fields),
            Self::Random(inner) => inner.encode(fields),
            Self::Grid(inner) => inner.encode(fields),
        }
    }
}

impl From<V1Hyperband> for V1Matrix {
    fn from(inner: V1Hyperband) -> Self {
        Self::Hyperband(inner)
    }
}

impl From<V1RandomSearch> for V1Matrix {
    fn from(inner: V1RandomSearch) -> Self {
        Self::Random(inner)
    }
}

impl From<V1GridSearch> for V1Matrix {
    fn from(inner: V1GridSearch) -> Self {
        Self::Grid(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DecodeMode, JsonKind};
    use serde_json::json;

    fn hyperband() -> V1Hyperband {
        let mut params = BTreeMap::new();
        params.insert(
            "lr".to_string(),
            json!({"kind": "linspace", "value": {"start": 0.01, "stop": 0.1, "num": 5}}),
        );
        V1Hyperband {
            params: Some(params),
            max_iterations: Some(81),
            eta: Some(3.0),
            resource: Some(V1OptimizationResource::new("epochs", V1ResourceType::Int)),
            metric: Some(V1OptimizationMetric::new("loss", V1Optimization::Minimize)),
            resume: Some(false),
            seed: Some(0),
            concurrency: Some(4),
            early_stopping: Some(vec![json!({"kind": "metric_early_stopping"})]),
            passthrough: Passthrough::default(),
        }
    }

    #[test]
    fn test_hyperband_round_trip_and_tag_emitted() {
        let original = hyperband();
        let json = original.to_json();

        assert_eq!(json["kind"], "hyperband");
        assert_eq!(json["resource"], json!({"name": "epochs", "type": "int"}));
        assert_eq!(json["resume"], false);
        assert_eq!(json["seed"], 0);
        assert_eq!(V1Hyperband::from_json(&json).unwrap(), original);
    }

    #[test]
    fn test_empty_hyperband_emits_only_tag() {
        assert_eq!(V1Hyperband::default().to_json(), json!({"kind": "hyperband"}));
    }

    #[test]
    fn test_hyperband_without_tag_decodes_directly() {
        let hb = V1Hyperband::from_json(&json!({"eta": 2})).unwrap();
        assert_eq!(hb.eta, Some(2.0));
    }

    #[test]
    fn test_hyperband_with_foreign_tag_is_rejected() {
        let error = V1Hyperband::from_json(&json!({"kind": "grid"})).unwrap_err();
        assert!(matches!(error, DecodeError::UnknownVariant { model: "V1Hyperband", .. }));
    }

    #[test]
    fn test_eta_string_lenient_passthrough_and_strict_error() {
        let json = json!({"kind": "hyperband", "eta": "three"});

        let hb = V1Hyperband::from_json(&json).unwrap();
        assert!(hb.eta.is_none());
        assert_eq!(hb.to_json(), json);

        let error = V1Hyperband::from_json_with(&json, DecodeMode::Strict).unwrap_err();
        assert!(matches!(
            error,
            DecodeError::TypeMismatch { model: "V1Hyperband", ref field, found: JsonKind::String, .. }
                if field == "eta"
        ));
    }

    #[test]
    fn test_nested_required_field_path() {
        let json = json!({"kind": "hyperband", "metric": {"optimization": "maximize"}});
        let error = V1Hyperband::from_json(&json).unwrap_err();
        assert!(matches!(error, DecodeError::MissingField { .. }));
        assert_eq!(error.field(), Some("metric.name"));
    }

    #[test]
    fn test_nested_mismatch_path_in_strict_mode() {
        let json = json!({"resource": {"name": "epochs", "type": "decimal"}});
        let error = V1Hyperband::from_json_with(&json, DecodeMode::Strict).unwrap_err();
        assert_eq!(error.field(), Some("resource.type"));
    }

    #[test]
    fn test_matrix_dispatches_on_kind() {
        let matrix = V1Matrix::from_json(&json!({"kind": "grid", "num_runs": 10})).unwrap();
        let V1Matrix::Grid(grid) = &matrix else {
            panic!("expected grid, got {matrix:?}");
        };
        assert_eq!(grid.num_runs, Some(10));
        assert_eq!(matrix.kind(), "grid");

        let matrix = V1Matrix::from_json(&json!({"kind": "random", "seed": 7})).unwrap();
        assert!(matches!(matrix, V1Matrix::Random(V1RandomSearch { seed: Some(7), .. })));
    }

    #[test]
    fn test_matrix_round_trip_through_union() {
        let matrix = V1Matrix::from(hyperband());
        assert_eq!(V1Matrix::from_json(&matrix.to_json()).unwrap(), matrix);
    }

    #[test]
    fn test_matrix_unknown_or_missing_tag_fails_in_both_modes() {
        for mode in [DecodeMode::Lenient, DecodeMode::Strict] {
            let error = V1Matrix::from_json_with(&json!({"kind": "bayes"}), mode).unwrap_err();
            assert!(matches!(
                error,
                DecodeError::UnknownVariant { model: "V1Matrix", tag: Some(ref t), .. } if t == "bayes"
            ));

            let error = V1Matrix::from_json_with(&json!({"num_runs": 3}), mode).unwrap_err();
            assert!(matches!(error, DecodeError::UnknownVariant { tag: None, .. }));

            let error = V1Matrix::from_json_with(&json!({"kind": 5}), mode).unwrap_err();
            assert!(matches!(error, DecodeError::UnknownVariant { tag: None, .. }));
        }
    }

    #[test]
    fn test_random_and_grid_round_trip_through_union() {
        let mut params = BTreeMap::new();
        params.insert("dropout".to_string(), json!({"kind": "choice", "value": [0, 0.5]}));

        let random = V1Matrix::from(V1RandomSearch {
            params: Some(params.clone()),
            num_runs: Some(0),
            seed: Some(0),
            concurrency: Some(1),
            early_stopping: Some(Vec::new()),
            passthrough: Passthrough::default(),
        });
        let grid = V1Matrix::from(V1GridSearch {
            params: Some(params),
            num_runs: Some(0),
            concurrency: None,
            early_stopping: Some(Vec::new()),
            passthrough: Passthrough::default(),
        });

        for matrix in [random, grid] {
            let json = matrix.to_json();
            assert_eq!(json["kind"], matrix.kind());
            assert_eq!(json["num_runs"], 0);
            assert_eq!(json["early_stopping"], json!([]));
            assert_eq!(V1Matrix::from_json_with(&json, DecodeMode::Strict).unwrap(), matrix);
        }
    }
}
