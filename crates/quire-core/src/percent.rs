#![forbid(unsafe_code)]

//! Percentage helpers.

/// Lower bound of a percentage.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of a percentage; also the total width budget of a row.
pub const PERCENT_MAX: f64 = 100.0;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: a NaN `value` collapses to `min`,
/// and inverted bounds are treated as the single point `min`.
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || max < min {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp `value` into `[0, 100]`.
#[inline]
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    clamp(value, PERCENT_MIN, PERCENT_MAX)
}

/// Whether `value` is a finite percentage in `[0, 100]`.
#[inline]
#[must_use]
pub fn is_percent(value: f64) -> bool {
    value.is_finite() && (PERCENT_MIN..=PERCENT_MAX).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::{clamp, clamp_percent, is_percent};
    use proptest::prelude::*;

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(45.0), 45.0);
        assert_eq!(clamp_percent(250.0), 100.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
        assert_eq!(clamp_percent(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn clamp_nan_collapses_to_min() {
        assert_eq!(clamp(f64::NAN, 15.0, 40.0), 15.0);
    }

    #[test]
    fn clamp_inverted_bounds_collapses_to_min() {
        assert_eq!(clamp(25.0, 40.0, 15.0), 40.0);
    }

    #[test]
    fn is_percent_rejects_out_of_range() {
        assert!(is_percent(0.0));
        assert!(is_percent(100.0));
        assert!(!is_percent(100.5));
        assert!(!is_percent(f64::NAN));
    }

    proptest! {
        #[test]
        fn clamp_stays_within_bounds(value in any::<f64>(), lo in -1e6f64..1e6, span in 0.0f64..1e6) {
            let hi = lo + span;
            let out = clamp(value, lo, hi);
            prop_assert!(out >= lo && out <= hi);
        }
    }
}
