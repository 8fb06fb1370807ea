//! The fixed clinical attribute schema shared by every layer.
//!
//! The thirteen attributes and their order are the contract with the
//! trained model: vectors are always assembled in this order, and the
//! loaded artifact is checked against this width at startup.

use serde::Deserialize;
use thiserror::Error;

/// Number of clinical attributes in one submission.
pub const FEATURE_COUNT: usize = 13;

/// Attribute names in model order.
///
/// This is the classic Cleveland heart-disease attribute set. The trained
/// artifact expects its inputs in exactly this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// Rejection raised when a would-be feature value is NaN or infinite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute '{name}' is not a finite number")]
pub struct NonFiniteFeature {
    /// Attribute name from [`FEATURE_NAMES`].
    pub name: &'static str,
}

/// An ordered vector of the thirteen clinical measurements.
///
/// The width is fixed by the type and every element is finite; the only
/// constructor is [`FeatureVector::new`], which rejects NaN and infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a vector from values already in model order.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, NonFiniteFeature> {
        for (i, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(NonFiniteFeature {
                    name: FEATURE_NAMES[i],
                });
            }
        }
        Ok(Self(values))
    }

    /// The measurements in model order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// One submission's raw per-field text, exactly as the user typed it.
///
/// Field names mirror [`FEATURE_NAMES`], so the web form posts straight
/// into this struct. A missing field deserialises to empty text and fails
/// parsing like any other blank entry. Instances live for one prediction
/// cycle and are never stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInputSet {
    pub age: String,
    pub sex: String,
    pub cp: String,
    pub trestbps: String,
    pub chol: String,
    pub fbs: String,
    pub restecg: String,
    pub thalach: String,
    pub exang: String,
    pub oldpeak: String,
    pub slope: String,
    pub ca: String,
    pub thal: String,
}

impl RawInputSet {
    /// The raw texts paired with their attribute names, in model order.
    pub fn fields(&self) -> [(&'static str, &str); FEATURE_COUNT] {
        [
            ("age", self.age.as_str()),
            ("sex", self.sex.as_str()),
            ("cp", self.cp.as_str()),
            ("trestbps", self.trestbps.as_str()),
            ("chol", self.chol.as_str()),
            ("fbs", self.fbs.as_str()),
            ("restecg", self.restecg.as_str()),
            ("thalach", self.thalach.as_str()),
            ("exang", self.exang.as_str()),
            ("oldpeak", self.oldpeak.as_str()),
            ("slope", self.slope.as_str()),
            ("ca", self.ca.as_str()),
            ("thal", self.thal.as_str()),
        ]
    }
}
