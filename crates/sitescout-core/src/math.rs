use rust_decimal::Decimal;

/// The bound a result is clamped to when it overflows.
fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Divide, saturating at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        saturated(numerator.is_sign_negative() != denominator.is_sign_negative())
    })
}

/// Divide, or return `fallback` when the denominator is zero.
///
/// Every derived ratio in the engine goes through this helper so that a
/// degenerate input yields a defined value instead of a panic.
pub fn safe_div(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator.is_zero() {
        fallback
    } else {
        saturating_div(numerator, denominator)
    }
}

/// Safe percentage: `numerator / denominator * 100`, zero when the denominator is zero.
pub fn safe_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        saturating_div(numerator, denominator).saturating_mul(Decimal::ONE_HUNDRED)
    }
}

/// Like [`safe_div`] but reports the undefined case as `None`.
pub fn checked_ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(saturating_div(numerator, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_div_guards_zero() {
        assert_eq!(safe_div(dec!(10), dec!(0), dec!(999)), dec!(999));
        assert_eq!(safe_div(dec!(10), dec!(4), dec!(999)), dec!(2.5));
    }

    #[test]
    fn test_safe_pct() {
        assert_eq!(safe_pct(dec!(1), dec!(4)), dec!(25));
        assert_eq!(safe_pct(dec!(1), dec!(0)), dec!(0));
    }

    #[test]
    fn test_checked_ratio() {
        assert_eq!(checked_ratio(dec!(9), dec!(3)), Some(dec!(3)));
        assert_eq!(checked_ratio(dec!(9), dec!(0)), None);
    }

    #[test]
    fn test_overflowing_division_saturates() {
        assert_eq!(safe_div(Decimal::MAX, dec!(0.5), dec!(0)), Decimal::MAX);
        assert_eq!(safe_div(Decimal::MAX, dec!(-0.5), dec!(0)), Decimal::MIN);
        assert_eq!(safe_pct(Decimal::MAX, dec!(1)), Decimal::MAX);
        assert_eq!(checked_ratio(dec!(-100000000000000000000), dec!(0.00000000000000000001)), Some(Decimal::MIN));
    }
}
