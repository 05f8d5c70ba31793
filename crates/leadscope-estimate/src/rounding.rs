//! Rounding applied to results at the point of return.

/// Rounds to the nearest integer, with halves rounded toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to `decimals` decimal places, halves toward positive infinity.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}

/// Rounds a population to a whole, non-negative count.
///
/// The cast saturates, so NaN and negatives become zero.
pub(crate) fn to_population(value: f64) -> u64 {
    round_half_up(value) as u64
}

/// Rounds a funnel stage to a whole count. The cast saturates.
pub(crate) fn to_count(value: f64) -> i64 {
    round_half_up(value) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(37.5), 38.0);
        assert_eq!(round_half_up(37.49), 37.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(395.867_768, 2), 395.87);
        assert_eq!(round_to(4.958_677, 2), 4.96);
        assert_eq!(round_to(2016.666_666, 0), 2017.0);
    }

    #[test]
    fn test_saturating_casts() {
        assert_eq!(to_population(-12.0), 0);
        assert_eq!(to_population(f64::NAN), 0);
        assert_eq!(to_population(109_199.5), 109_200);
        assert_eq!(to_count(-2.5), -2);
        assert_eq!(to_count(f64::INFINITY), i64::MAX);
    }
}
