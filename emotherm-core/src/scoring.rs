//! Score to temperature mapping
//!
//! The mapper is a pure, total, monotone non-decreasing function of the
//! summed answer weights. A full bank of answers yields totals in 0..=50,
//! which this maps onto the −10..=40 display scale; out-of-range totals
//! clamp to the scale ends so the function is defined for any input.

use crate::types::Temperature;

/// Degrees subtracted from the raw total to center the scale.
const SCALE_OFFSET: i64 = 10;

/// Map a total answer score to a temperature.
///
/// Deterministic and monotone non-decreasing: a warmer answer set can never
/// produce a colder temperature. Saturates at the scale ends instead of
/// overflowing for extreme inputs.
pub fn score_to_temperature(total: i64) -> Temperature {
    let degrees = total
        .saturating_sub(SCALE_OFFSET)
        .clamp(Temperature::MIN.0 as i64, Temperature::MAX.0 as i64);
    Temperature(degrees as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        for total in -100..=100 {
            assert_eq!(score_to_temperature(total), score_to_temperature(total));
        }
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let mut prev = score_to_temperature(-200);
        for total in -199..=200 {
            let t = score_to_temperature(total);
            assert!(t >= prev, "mapping decreased at total {}", total);
            prev = t;
        }
    }

    #[test]
    fn test_nominal_range() {
        assert_eq!(score_to_temperature(0), Temperature(-10));
        assert_eq!(score_to_temperature(10), Temperature(0));
        assert_eq!(score_to_temperature(25), Temperature(15));
        assert_eq!(score_to_temperature(50), Temperature(40));
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        assert_eq!(score_to_temperature(i64::MIN), Temperature::MIN);
        assert_eq!(score_to_temperature(i64::MAX), Temperature::MAX);
        assert_eq!(score_to_temperature(-1), Temperature(-10));
        assert_eq!(score_to_temperature(1000), Temperature(40));
    }

    #[test]
    fn test_result_always_on_scale() {
        for total in [i64::MIN, -1, 0, 25, 50, 51, i64::MAX] {
            assert!(score_to_temperature(total).on_scale());
        }
    }
}
