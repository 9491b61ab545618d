//! Parameter validation.
//!
//! Preset files are checked strictly: every value must lie within its
//! parameter's declared range, and all violations are reported together.
//!
//! # Example
//!
//! ```rust
//! use chorus_config::{ParamValues, validate_params};
//!
//! let ok = ParamValues { mix: 50, ..ParamValues::default() };
//! assert!(validate_params(&ok).is_ok());
//!
//! let bad = ParamValues { mix: 150, feedback: 99, ..ParamValues::default() };
//! assert!(validate_params(&bad).is_err());
//! ```

use chorus_effect::{ChorusParam, ParameterSet};
use thiserror::Error;

use crate::params::ParamValues;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Key of the parameter.
        param: String,
        /// The value that was out of range.
        value: i32,
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks a single raw value against `param`'s range.
pub fn validate_param(param: ChorusParam, value: i32) -> ValidationResult<i32> {
    let d = param.descriptor();
    if d.contains(value as f32) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            param: param.key().to_string(),
            value,
            min: d.min as i32,
            max: d.max as i32,
        })
    }
}

/// Checks every value, returning the parameter set or all violations.
///
/// A single violation is returned as-is; several are wrapped in
/// [`ValidationError::Multiple`].
pub fn validate_params(values: &ParamValues) -> ValidationResult<ParameterSet> {
    let set = values.to_parameter_set();
    let mut errors: Vec<ValidationError> = ChorusParam::ALL
        .into_iter()
        .filter_map(|p| validate_param(p, set.get(p)).err())
        .collect();

    match errors.len() {
        0 => Ok(set),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(
            validate_params(&ParamValues::default()),
            Ok(ParameterSet::default())
        );
    }

    #[test]
    fn range_edges_are_valid() {
        for p in ChorusParam::ALL {
            let d = p.descriptor();
            assert!(validate_param(p, d.min as i32).is_ok());
            assert!(validate_param(p, d.max as i32).is_ok());
        }
    }

    #[test]
    fn single_violation() {
        let values = ParamValues {
            feedback: 96,
            ..ParamValues::default()
        };
        assert_eq!(
            validate_params(&values),
            Err(ValidationError::OutOfRange {
                param: "feedback".to_string(),
                value: 96,
                min: 0,
                max: 95,
            })
        );
    }

    #[test]
    fn multiple_violations_collected() {
        let values = ParamValues {
            rate: 0,
            center_delay: 100,
            ..ParamValues::default()
        };
        match validate_params(&values) {
            Err(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                let msg = ValidationError::Multiple(errors).to_string();
                assert!(msg.contains("'rate' value 0"), "got: {msg}");
                assert!(msg.contains("'center_delay' value 100"), "got: {msg}");
            }
            other => panic!("expected multiple errors, got {other:?}"),
        }
    }
}
