//! ONNX Runtime backend for classifiers exported from scikit-learn.
//!
//! Expects the skl2onnx layout: one float input named `float_input` of
//! shape `[batch, features]` and an int64 `label` as the first output.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use cardiocast_core::{FEATURE_COUNT, FeatureVector};

use crate::Classifier;
use crate::error::{ArtifactError, InferenceError};

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // Session::run needs exclusive access, so scoring calls serialise here.
    session: Mutex<Session>,
    feature_count: usize,
    name: String,
}

impl OnnxClassifier {
    /// Load an exported model from `path` and probe its input width.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::Missing(path.to_path_buf()));
        }
        let session = Session::builder()
            .and_then(|builder| builder.commit_from_file(path))
            .map_err(|e| ArtifactError::Onnx(e.to_string()))?;
        let feature_count = infer_input_width(session.inputs()[0].dtype()).unwrap_or(FEATURE_COUNT);
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx-model".to_string());
        info!(model = %name, features = feature_count, "loaded onnx classifier");
        Ok(Self {
            session: Mutex::new(session),
            feature_count,
            name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let values = features.values();
        if values.len() != self.feature_count {
            return Err(InferenceError::ShapeMismatch {
                expected: self.feature_count,
                got: values.len(),
            });
        }

        let floats: Vec<f32> = values.iter().map(|&v| v as f32).collect();
        let input = Tensor::from_array((
            [1i64, self.feature_count as i64],
            floats.into_boxed_slice(),
        ))
        .map_err(|e| InferenceError::Backend(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::Backend("classifier session lock poisoned".into()))?;
        let outputs = session
            .run(ort::inputs!["float_input" => input])
            .map_err(|e| InferenceError::Backend(e.to_string()))?;

        let (label_shape, labels) = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::Backend(e.to_string()))?;
        let dims: &[i64] = label_shape;
        if dims.first().copied() != Some(1) || labels.is_empty() {
            return Err(InferenceError::Backend(format!(
                "unexpected label output shape: {dims:?}"
            )));
        }
        Ok(labels[0])
    }

    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Try to infer the expected feature width from the model input type.
fn infer_input_width(input_type: &ort::value::ValueType) -> Option<usize> {
    match input_type {
        ort::value::ValueType::Tensor { shape, .. } => {
            // Last dimension is the feature width; the first is the batch.
            shape
                .last()
                .and_then(|&d| if d > 0 { Some(d as usize) } else { None })
        }
        _ => None,
    }
}
