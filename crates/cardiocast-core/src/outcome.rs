//! Outcome types handed to the presentation surface.

use std::fmt;

/// Binary diagnosis produced by one prediction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    HasDisease,
    NoDisease,
}

impl PredictionLabel {
    /// User-facing diagnosis line, wording carried over from the deployed
    /// app (capitalisation included).
    pub fn message(&self) -> &'static str {
        match self {
            Self::HasDisease => "The Person has heart disease",
            Self::NoDisease => "The person does not have heart disease",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Notice shown when a submission fails validation.
///
/// Recoverable and local to one submission: the user corrects the fields
/// and submits again. Nothing reaches the classifier on this path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputNotice {
    message: String,
}

impl InvalidInputNotice {
    /// Re-entry instruction shown for every rejected submission.
    pub const DEFAULT_MESSAGE: &'static str =
        "Please enter valid numeric values for all fields.";

    pub fn new() -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvalidInputNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvalidInputNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
