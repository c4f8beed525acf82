//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use vdrl_screen::model::{ArtifactStump, ModelArtifact, ScreeningModel, FORMAT_VERSION};
use vdrl_screen::schema;

/// A complete submission: every schema field present with value "0".
pub fn complete_form() -> HashMap<String, String> {
    schema::FEATURE_NAMES
        .iter()
        .map(|&name| (name.to_string(), "0".to_string()))
        .collect()
}

/// A complete submission with one field overridden.
pub fn form_with(name: &str, value: &str) -> HashMap<String, String> {
    let mut form = complete_form();
    form.insert(name.to_string(), value.to_string());
    form
}

/// A real model whose decision is easy to reason about: label 1 exactly when
/// AGE (the last schema feature) exceeds 30.
pub fn age_threshold_model() -> ScreeningModel {
    let artifact = ModelArtifact {
        version: FORMAT_VERSION.to_string(),
        n_features: schema::FEATURE_COUNT,
        feature_names: Some(
            schema::FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        ),
        stumps: vec![ArtifactStump {
            feature: (schema::FEATURE_COUNT - 1) as u32,
            threshold: 30.0,
            polarity: 1,
            weight: 1.0,
        }],
    };
    ScreeningModel::from_artifact(artifact).expect("valid fixture artifact")
}
