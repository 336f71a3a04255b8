//! Purchase quantity derivation.

/// Number of fund units an `amount` of money buys at `unit_value` per unit.
///
/// No rounding is applied here; the presentation layer decides how many
/// decimals to show. A `unit_value` of zero yields positive infinity per
/// IEEE 754 division, which callers propagate rather than treat as an
/// error.
pub fn calculate_quantity(amount: f64, unit_value: f64) -> f64 {
    amount / unit_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_units() {
        assert_eq!(calculate_quantity(1000.0, 100.0), 10.0);
        assert_eq!(calculate_quantity(500.0, 50.0), 10.0);
    }

    #[test]
    fn test_fractional_units() {
        let quantity = calculate_quantity(100.0, 33.0);
        assert!((quantity - 3.0303).abs() < 1e-4);
    }

    #[test]
    fn test_zero_unit_value_yields_infinity() {
        assert_eq!(calculate_quantity(100.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(calculate_quantity(0.0, 75.0), 0.0);
    }
}
