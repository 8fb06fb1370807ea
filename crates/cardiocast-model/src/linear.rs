//! The default classifier: a logistic-regression artifact serialised as
//! versioned JSON.
//!
//! The document carries the feature names in training order, one
//! coefficient per feature, the intercept, and an optional decision
//! threshold. Loading happens once at startup; after that the artifact is
//! immutable and safe to share behind [`std::sync::Arc`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use cardiocast_core::FeatureVector;

use crate::Classifier;
use crate::error::{ArtifactError, InferenceError};

/// Artifact format version this build can read.
pub const FORMAT_VERSION: u32 = 1;

const DEFAULT_THRESHOLD: f64 = 0.5;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// A pre-trained logistic-regression classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearArtifact {
    format_version: u32,
    model_name: String,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    trained_at: Option<String>,
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

impl LinearArtifact {
    /// Load and validate an artifact from `path`.
    ///
    /// Fails if the file is missing, is not valid JSON for this format,
    /// carries an unsupported `format_version`, or is internally
    /// inconsistent. Called once, at process start.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::Missing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&raw)?;
        artifact.check_consistent()?;
        info!(
            model = %artifact.model_name,
            features = artifact.coefficients.len(),
            trained_at = artifact.trained_at.as_deref().unwrap_or("unknown"),
            "loaded classifier artifact"
        );
        Ok(artifact)
    }

    fn check_consistent(&self) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                supported: FORMAT_VERSION,
            });
        }
        if self.coefficients.is_empty() {
            return Err(ArtifactError::Malformed("artifact has no features".into()));
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(ArtifactError::Malformed(format!(
                "{} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        let finite = self.coefficients.iter().all(|c| c.is_finite())
            && self.intercept.is_finite()
            && self.threshold.is_finite();
        if !finite {
            return Err(ArtifactError::Malformed(
                "non-finite coefficient, intercept, or threshold".into(),
            ));
        }
        Ok(())
    }

    /// Feature names the model was trained on, in training order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Probability of the disease class: sigmoid of the linear score.
    pub fn probability(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let values = features.values();
        if values.len() != self.coefficients.len() {
            return Err(InferenceError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: values.len(),
            });
        }
        let score: f64 = self
            .coefficients
            .iter()
            .zip(values.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(score))
    }
}

impl Classifier for LinearArtifact {
    fn classify(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let p = self.probability(features)?;
        Ok(i64::from(p >= self.threshold))
    }

    fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
