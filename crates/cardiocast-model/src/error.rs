//! Error types for artifact loading and scoring.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a classifier artifact. Fatal at startup: the
/// service refuses to come up without a usable model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {0}")]
    Missing(PathBuf),

    #[error("model artifact not readable: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("malformed model artifact: {0}")]
    Malformed(String),

    #[cfg(feature = "onnx")]
    #[error("onnx runtime error: {0}")]
    Onnx(String),
}

/// Scoring-time contract violation between a vector and the loaded
/// artifact. Never rendered as a diagnosis.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InferenceError {
    #[error("classifier expects {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("classifier backend failure: {0}")]
    Backend(String),
}
