//! Model gateway: classifier artifact loading and the scoring capability.

pub mod error;
mod linear;

#[cfg(feature = "onnx")]
mod onnx;

pub use error::{ArtifactError, InferenceError};
pub use linear::{FORMAT_VERSION, LinearArtifact};
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

use cardiocast_core::FeatureVector;

/// The scoring capability a trained classifier provides.
///
/// Implementations are deterministic and side-effect free: the same vector
/// always yields the same class. `Send + Sync` so one loaded artifact can
/// be shared read-only across request tasks.
pub trait Classifier: Send + Sync {
    /// Class index for one vector: 0 for no disease, 1 for disease.
    ///
    /// A vector that does not match the artifact's trained width fails
    /// with [`InferenceError`] instead of being coerced to a label.
    fn classify(&self, features: &FeatureVector) -> Result<i64, InferenceError>;

    /// Width of the input the artifact was trained on.
    fn feature_count(&self) -> usize;

    /// Model identifier for logs and health reporting.
    fn name(&self) -> &str;
}
