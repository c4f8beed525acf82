//! The model gateway: the loaded classifier and its single prediction
//! operation.
//!
//! [`ScreeningModel`] wraps the stump ensemble deserialized from the JSON
//! artifact. It is constructed once at startup, validated, and never mutated
//! afterwards, so any number of in-flight requests may call
//! [`Classifier::classify`] concurrently without coordination.

use std::path::Path;

use crate::schema;

pub mod format;

pub use format::{ArtifactStump, ModelArtifact, ModelLoadError, FORMAT_VERSION};

/// One request's feature values, index-aligned to [`schema::FEATURE_NAMES`].
///
/// The fixed-length array makes a wrong-length vector unrepresentable; the
/// gateway performs no runtime length check.
pub type FeatureVector = [f64; schema::FEATURE_COUNT];

/// A binary classifier over screening feature vectors.
///
/// The request handler is written against this trait rather than the concrete
/// model, so tests can substitute a deterministic stub.
pub trait Classifier: Send + Sync {
    /// Classify one feature vector into a label, 0 or 1.
    fn classify(&self, features: &FeatureVector) -> i64;
}

/// Validated decision stump, ready for inference.
#[derive(Debug, Clone)]
struct Stump {
    feature: usize,
    threshold: f64,
    polarity: f64,
    weight: f64,
}

impl Stump {
    /// Signed, weighted vote of this stump for the given row.
    fn vote(&self, features: &FeatureVector) -> f64 {
        let side = if features[self.feature] > self.threshold {
            1.0
        } else {
            -1.0
        };
        self.weight * self.polarity * side
    }
}

/// The loaded screening classifier.
pub struct ScreeningModel {
    stumps: Vec<Stump>,
}

impl ScreeningModel {
    /// Load and validate a model artifact from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let file = std::fs::File::open(path)?;
        let artifact: ModelArtifact = serde_json::from_reader(std::io::BufReader::new(file))?;
        Self::from_artifact(artifact)
    }

    /// Build a model from an already deserialized artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelLoadError> {
        artifact.validate()?;
        let stumps = artifact
            .stumps
            .iter()
            .map(|s| Stump {
                feature: s.feature as usize,
                threshold: s.threshold,
                polarity: f64::from(s.polarity),
                weight: s.weight,
            })
            .collect();
        Ok(Self { stumps })
    }

    /// Number of stumps in the ensemble.
    pub fn n_stumps(&self) -> usize {
        self.stumps.len()
    }

    /// Number of input features.
    pub fn n_features(&self) -> usize {
        schema::FEATURE_COUNT
    }

    /// Raw weighted vote sum for a row. Positive means label 1.
    fn margin(&self, features: &FeatureVector) -> f64 {
        self.stumps.iter().map(|s| s.vote(features)).sum()
    }
}

impl Classifier for ScreeningModel {
    fn classify(&self, features: &FeatureVector) -> i64 {
        if self.margin(features) > 0.0 {
            1
        } else {
            0
        }
    }
}

impl std::fmt::Debug for ScreeningModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreeningModel")
            .field("n_stumps", &self.n_stumps())
            .field("n_features", &self.n_features())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn artifact(stumps: Vec<ArtifactStump>) -> ModelArtifact {
        ModelArtifact {
            version: FORMAT_VERSION.to_string(),
            n_features: schema::FEATURE_COUNT,
            feature_names: None,
            stumps,
        }
    }

    /// Single stump on AGE (index 24): label 1 above 30, else 0.
    fn age_model() -> ScreeningModel {
        ScreeningModel::from_artifact(artifact(vec![ArtifactStump {
            feature: 24,
            threshold: 30.0,
            polarity: 1,
            weight: 0.8,
        }]))
        .unwrap()
    }

    #[test]
    fn single_stump_splits_on_threshold() {
        let model = age_model();
        let mut row = [0.0; schema::FEATURE_COUNT];

        row[24] = 45.0;
        assert_eq!(model.classify(&row), 1);

        row[24] = 20.0;
        assert_eq!(model.classify(&row), 0);

        // Exactly at the threshold: stump votes negative.
        row[24] = 30.0;
        assert_eq!(model.classify(&row), 0);
    }

    #[test]
    fn weighted_votes_sum() {
        let model = ScreeningModel::from_artifact(artifact(vec![
            ArtifactStump {
                feature: 0,
                threshold: 0.5,
                polarity: 1,
                weight: 0.3,
            },
            ArtifactStump {
                feature: 1,
                threshold: 0.5,
                polarity: -1,
                weight: 0.7,
            },
        ]))
        .unwrap();

        let mut row = [0.0; schema::FEATURE_COUNT];
        row[0] = 1.0; // +0.3
        row[1] = 1.0; // -0.7
        assert_abs_diff_eq!(model.margin(&row), -0.4, epsilon = 1e-12);
        assert_eq!(model.classify(&row), 0);

        row[1] = 0.0; // +0.7
        assert_abs_diff_eq!(model.margin(&row), 1.0, epsilon = 1e-12);
        assert_eq!(model.classify(&row), 1);
    }

    #[test]
    fn classify_is_deterministic() {
        let model = age_model();
        let mut row = [1.0; schema::FEATURE_COUNT];
        row[24] = 52.0;
        assert_eq!(model.classify(&row), model.classify(&row));
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = ScreeningModel::load("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ModelLoadError::Io(_)));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let path = std::env::temp_dir().join("vdrl_screen_bad_artifact.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let err = ScreeningModel::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ModelLoadError::Parse(_)));
    }

    #[test]
    fn load_roundtrip() {
        let path = std::env::temp_dir().join("vdrl_screen_artifact.json");
        let source = artifact(vec![ArtifactStump {
            feature: 24,
            threshold: 30.0,
            polarity: 1,
            weight: 0.8,
        }]);
        std::fs::write(&path, serde_json::to_vec(&source).unwrap()).unwrap();
        let model = ScreeningModel::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(model.n_stumps(), 1);
        let mut row = [0.0; schema::FEATURE_COUNT];
        row[24] = 45.0;
        assert_eq!(model.classify(&row), 1);
    }
}
