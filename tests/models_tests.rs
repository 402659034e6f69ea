//! Conversion behavior of the public models, exercised through the crate API.

use std::collections::BTreeMap;

use polyaxon_api::models::{
    V1Hyperband, V1Matrix, V1Optimization, V1OptimizationMetric, V1OptimizationResource,
    V1ResourceType, V1Schedule,
};
use polyaxon_api::{DecodeError, DecodeMode, Model};
use serde_json::json;

fn hyperband() -> V1Hyperband {
    let mut params = BTreeMap::new();
    params.insert(
        "lr".to_string(),
        json!({"kind": "uniform", "value": [0.001, 0.1]}),
    );
    V1Hyperband {
        params: Some(params),
        max_iterations: Some(81),
        eta: Some(3.0),
        resource: Some(V1OptimizationResource::new("epochs", V1ResourceType::Int)),
        metric: Some(V1OptimizationMetric::new("loss", V1Optimization::Minimize)),
        resume: Some(false),
        seed: Some(0),
        concurrency: Some(2),
        early_stopping: Some(Vec::new()),
        ..V1Hyperband::default()
    }
}

#[test]
fn test_hyperband_round_trip_through_union() {
    let matrix = V1Matrix::from(hyperband());
    let encoded = matrix.to_json();

    assert_eq!(encoded["kind"], json!("hyperband"));
    assert_eq!(encoded["resume"], json!(false));
    assert_eq!(encoded["seed"], json!(0));
    assert_eq!(encoded["resource"], json!({"name": "epochs", "type": "int"}));

    let decoded = V1Matrix::from_json_with(&encoded, DecodeMode::Strict).unwrap();
    assert_eq!(decoded, matrix);
}

#[test]
fn test_unknown_matrix_kind_fails_in_both_modes() {
    let value = json!({"kind": "bayes", "numInitialRuns": 5});

    for mode in [DecodeMode::Lenient, DecodeMode::Strict] {
        let error = V1Matrix::from_json_with(&value, mode).unwrap_err();
        assert!(matches!(
            error,
            DecodeError::UnknownVariant { ref tag, .. } if tag.as_deref() == Some("bayes")
        ));
    }
}

#[test]
fn test_schedule_without_kind_is_unknown_variant() {
    let error = V1Schedule::from_json(&json!({"cron": "0 * * * *"})).unwrap_err();
    assert!(matches!(
        error,
        DecodeError::UnknownVariant { tag: None, .. }
    ));
}

#[test]
fn test_nested_mismatch_reports_field_path() {
    let value = json!({
        "kind": "hyperband",
        "metric": {"name": "loss", "optimization": 7}
    });

    let error = V1Matrix::from_json_with(&value, DecodeMode::Strict).unwrap_err();
    assert!(error.to_string().contains("metric.optimization"));

    let lenient = V1Matrix::from_json(&value).unwrap();
    assert_eq!(lenient.to_json(), value);
}
