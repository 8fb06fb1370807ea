pub mod features;
pub mod outcome;

pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, NonFiniteFeature, RawInputSet};
pub use outcome::{InvalidInputNotice, PredictionLabel};
