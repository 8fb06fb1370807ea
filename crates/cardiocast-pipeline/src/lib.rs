//! The prediction pipeline: validate raw form text, score it through the
//! injected classifier, map the class to a user-facing label.

mod engine;
mod parse;

pub use engine::{InferencePipeline, Outcome};
pub use parse::{ValidationError, validate_and_parse};
