//! Orchestration of one prediction cycle.

use std::sync::Arc;

use cardiocast_core::{FeatureVector, InvalidInputNotice, PredictionLabel, RawInputSet};
use cardiocast_model::{Classifier, InferenceError};
use tracing::debug;

use crate::parse::validate_and_parse;

/// What one submission produced, as consumed by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The classifier produced a diagnosis.
    Label(PredictionLabel),
    /// The submission failed validation; nothing was scored.
    InvalidInput(InvalidInputNotice),
}

/// The prediction pipeline with its injected classifier.
///
/// Holds the one loaded, read-only classifier; everything else is
/// per-submission state discarded when [`InferencePipeline::run`] returns.
pub struct InferencePipeline {
    classifier: Arc<dyn Classifier>,
}

impl InferencePipeline {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Identifier of the loaded model.
    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    /// Map one validated vector to a diagnosis.
    ///
    /// The class-to-label mapping is an explicit match: 1 is disease, 0 is
    /// no disease, and any out-of-contract class falls back to no disease
    /// instead of erroring.
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionLabel, InferenceError> {
        let class = self.classifier.classify(features)?;
        let label = match class {
            1 => PredictionLabel::HasDisease,
            0 => PredictionLabel::NoDisease,
            _ => PredictionLabel::NoDisease,
        };
        Ok(label)
    }

    /// Run one full submission: validate, score, map.
    ///
    /// A validation failure is a normal outcome (the user is asked to
    /// re-enter values) and never reaches the classifier. A classifier
    /// failure comes back as an error so callers cannot mistake it for a
    /// diagnosis.
    pub fn run(&self, raw: &RawInputSet) -> Result<Outcome, InferenceError> {
        let features = match validate_and_parse(raw) {
            Ok(vector) => vector,
            Err(_) => {
                debug!("submission rejected: non-numeric input");
                return Ok(Outcome::InvalidInput(InvalidInputNotice::new()));
            }
        };
        let label = self.predict(&features)?;
        debug!(%label, "submission scored");
        Ok(Outcome::Label(label))
    }
}
