//! All-or-nothing parsing of raw form text into a feature vector.

use cardiocast_core::{FEATURE_COUNT, FeatureVector, RawInputSet};
use thiserror::Error;

/// Aggregate rejection for one submission.
///
/// Deliberately does not say which field was bad: any unusable field
/// rejects the whole set and the user re-enters values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("one or more fields are not valid numeric values")]
pub struct ValidationError;

/// Parse all thirteen raw fields into a [`FeatureVector`].
///
/// Each field is trimmed and parsed as a float. Any empty, non-numeric,
/// or non-finite field fails the whole submission. There is no range
/// checking: out-of-domain numeric values (a sex of 5, a negative age)
/// pass through to the model unchanged.
pub fn validate_and_parse(raw: &RawInputSet) -> Result<FeatureVector, ValidationError> {
    let mut values = [0.0f64; FEATURE_COUNT];
    for (slot, (_, text)) in values.iter_mut().zip(raw.fields()) {
        *slot = text.trim().parse().map_err(|_| ValidationError)?;
    }
    FeatureVector::new(values).map_err(|_| ValidationError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; FEATURE_COUNT]) -> RawInputSet {
        RawInputSet {
            age: values[0].into(),
            sex: values[1].into(),
            cp: values[2].into(),
            trestbps: values[3].into(),
            chol: values[4].into(),
            fbs: values[5].into(),
            restecg: values[6].into(),
            thalach: values[7].into(),
            exang: values[8].into(),
            oldpeak: values[9].into(),
            slope: values[10].into(),
            ca: values[11].into(),
            thal: values[12].into(),
        }
    }

    fn complete() -> RawInputSet {
        raw([
            "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0", "1",
        ])
    }

    #[test]
    fn parses_a_complete_submission() {
        let vector = validate_and_parse(&complete()).unwrap();
        assert_eq!(vector.values()[0], 63.0);
        assert_eq!(vector.values()[9], 2.3);
        assert_eq!(vector.values()[12], 1.0);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut raw = complete();
        raw.age = "  63  ".into();
        let vector = validate_and_parse(&raw).unwrap();
        assert_eq!(vector.values()[0], 63.0);
    }

    #[test]
    fn empty_field_rejects_the_whole_set() {
        let mut raw = complete();
        raw.age = String::new();
        assert_eq!(validate_and_parse(&raw), Err(ValidationError));
    }

    #[test]
    fn non_numeric_field_rejects_the_whole_set() {
        let mut raw = complete();
        raw.chol = "two hundred".into();
        assert_eq!(validate_and_parse(&raw), Err(ValidationError));
    }

    #[test]
    fn non_finite_text_is_rejected() {
        // "nan" and "inf" parse as floats but violate the vector invariant.
        let mut raw = complete();
        raw.oldpeak = "nan".into();
        assert_eq!(validate_and_parse(&raw), Err(ValidationError));

        let mut raw = complete();
        raw.thalach = "inf".into();
        assert_eq!(validate_and_parse(&raw), Err(ValidationError));
    }

    #[test]
    fn out_of_domain_values_still_parse() {
        // No range checking: clinically absurd numerics are accepted.
        let vector = validate_and_parse(&raw([
            "-5", "9", "42", "0", "10000", "3", "7", "-1", "2", "99.9", "8", "100", "12",
        ]))
        .unwrap();
        assert_eq!(vector.values()[0], -5.0);
        assert_eq!(vector.values()[4], 10000.0);
    }

    #[test]
    fn decimal_text_is_accepted_for_integer_attributes() {
        let mut raw = complete();
        raw.ca = "1.5".into();
        let vector = validate_and_parse(&raw).unwrap();
        assert_eq!(vector.values()[11], 1.5);
    }
}
