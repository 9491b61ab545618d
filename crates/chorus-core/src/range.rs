//! Linear range mapping.
//!
//! Host-facing parameters are integers in user-friendly ranges (0-100 for a
//! percentage, 0-95 for feedback). The signal path wants unit-scaled values,
//! so raw values are rescaled with [`scale_range`] before use.

use thiserror::Error;

/// Errors from range mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The source range has zero width.
    #[error("source range has zero width")]
    DivideByZero,
}

/// Map `raw` from `[raw_low, raw_high]` onto `[out_low, out_high]`.
///
/// Computes `(raw - raw_low) / (raw_high - raw_low) * (out_high - out_low) + out_low`.
/// Inputs outside the source range extrapolate linearly; callers keep raw
/// values in range.
///
/// # Arguments
/// * `raw` - Value to map
/// * `raw_low`, `raw_high` - Source range endpoints
/// * `out_low`, `out_high` - Destination range endpoints
///
/// # Errors
/// [`RangeError::DivideByZero`] when `raw_high == raw_low`.
///
/// # Example
///
/// ```rust
/// use chorus_core::scale_range;
///
/// assert_eq!(scale_range(50.0, 0.0, 100.0, 0.0, 1.0), Ok(0.5));
/// assert!(scale_range(1.0, 3.0, 3.0, 0.0, 1.0).is_err());
/// ```
#[inline]
pub fn scale_range(
    raw: f32,
    raw_low: f32,
    raw_high: f32,
    out_low: f32,
    out_high: f32,
) -> Result<f32, RangeError> {
    let span = raw_high - raw_low;
    if span == 0.0 {
        return Err(RangeError::DivideByZero);
    }
    Ok((raw - raw_low) / span * (out_high - out_low) + out_low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_midpoint() {
        assert_eq!(scale_range(50.0, 0.0, 100.0, 0.0, 1.0), Ok(0.5));
    }

    #[test]
    fn maps_endpoints() {
        assert_eq!(scale_range(0.0, 0.0, 95.0, 0.0, 0.95), Ok(0.0));
        let top = scale_range(95.0, 0.0, 95.0, 0.0, 0.95).unwrap();
        assert!((top - 0.95).abs() < 1e-7);
    }

    #[test]
    fn feedback_percent_maps_to_fraction() {
        let v = scale_range(40.0, 0.0, 95.0, 0.0, 0.95).unwrap();
        assert!((v - 0.40).abs() < 1e-6);
    }

    #[test]
    fn inverted_output_range() {
        assert_eq!(scale_range(25.0, 0.0, 100.0, 1.0, 0.0), Ok(0.75));
    }

    #[test]
    fn zero_width_source_is_error() {
        assert_eq!(
            scale_range(5.0, 5.0, 5.0, 0.0, 1.0),
            Err(RangeError::DivideByZero)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            RangeError::DivideByZero.to_string(),
            "source range has zero width"
        );
    }
}
