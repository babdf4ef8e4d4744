//! End-to-end exercise of the scaffold: settings in, workspace laid out,
//! artifacts written and read back — the sequence every pipeline stage
//! runs through.

use mlpipe_core::{create_dirs, file_size, load_bin, load_json, read_yaml_as, save_bin, save_json};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
struct StageSettings {
    artifacts_root: String,
    metrics_file: String,
    model_file: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ModelParams {
    alpha: f64,
    l1_ratio: f64,
    coefficients: Vec<f64>,
}

#[test]
fn settings_to_artifacts_workflow() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let settings_path = dir.path().join("params.yaml");
    std::fs::write(
        &settings_path,
        "artifacts_root: artifacts\nmetrics_file: metrics.json\nmodel_file: model.bin\n",
    )?;

    let settings: StageSettings = read_yaml_as(&settings_path)?;
    assert_eq!(settings.artifacts_root, "artifacts");

    let root = dir.path().join(&settings.artifacts_root);
    create_dirs(&[root.join("evaluation"), root.join("models")], true)?;
    // Second pass over the same layout must be a no-op.
    create_dirs(&[root.join("evaluation"), root.join("models")], false)?;

    let metrics_path = root.join("evaluation").join(&settings.metrics_file);
    save_json(&metrics_path, &json!({ "rmse": 0.74, "r2": 0.23 }))?;
    assert_eq!(load_json(&metrics_path)?, json!({ "rmse": 0.74, "r2": 0.23 }));

    let model_path = root.join("models").join(&settings.model_file);
    let params = ModelParams {
        alpha: 0.7,
        l1_ratio: 0.5,
        coefficients: vec![0.12, -0.03, 0.44],
    };
    save_bin(&model_path, &params)?;
    let restored: ModelParams = load_bin(&model_path)?;
    assert_eq!(restored, params);

    let reported = file_size(&model_path)?;
    assert!(reported.starts_with("~ "));
    assert!(reported.ends_with(" KB"));

    Ok(())
}
