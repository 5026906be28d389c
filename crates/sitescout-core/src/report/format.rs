use rust_decimal::{Decimal, RoundingStrategy};

use crate::feasibility::model::FinancialReport;
use crate::types::{Currency, Money, Multiple, Percent};

/// Whole-unit amount with thousands separators, e.g. "INR 1,147,500".
pub fn format_money(amount: Money, currency: &Currency) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{} -{}", currency.code(), digits)
    } else {
        format!("{} {}", currency.code(), digits)
    }
}

/// One decimal place with a percent sign, e.g. "36.2%".
pub fn format_pct(value: Percent) -> String {
    format!("{}%", fixed(value, 1))
}

/// Two decimal places with a multiplier suffix, e.g. "6.38x".
pub fn format_multiple(value: Multiple) -> String {
    format!("{}x", fixed(value, 2))
}

/// Break-even for display: "6.0 months", or a "never" marker for the sentinel.
pub fn format_breakeven(report: &FinancialReport) -> String {
    match report.payback_months() {
        Some(months) => format!("{} months", fixed(months, 1)),
        None => "Never (no break-even)".to_string(),
    }
}

/// Round half away from zero and pad to exactly `dp` decimal places.
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(dec!(1147500), &Currency::INR), "INR 1,147,500");
        assert_eq!(format_money(dec!(999), &Currency::INR), "INR 999");
        assert_eq!(format_money(dec!(1000), &Currency::USD), "USD 1,000");
        assert_eq!(format_money(dec!(0), &Currency::INR), "INR 0");
    }

    #[test]
    fn test_format_money_rounds_and_signs() {
        assert_eq!(format_money(dec!(57374.5), &Currency::INR), "INR 57,375");
        assert_eq!(format_money(dec!(-2084125), &Currency::INR), "INR -2,084,125");
        assert_eq!(format_money(dec!(-0.2), &Currency::INR), "INR 0");
    }

    #[test]
    fn test_fixed_pads_and_rounds() {
        assert_eq!(fixed(dec!(6), 1), "6.0");
        assert_eq!(fixed(dec!(36.2418), 1), "36.2");
        assert_eq!(fixed(dec!(6.375), 2), "6.38");
        assert_eq!(fixed(dec!(-0.01), 1), "0.0");
    }

    #[test]
    fn test_format_pct_and_multiple() {
        assert_eq!(format_pct(dec!(199.62)), "199.6%");
        assert_eq!(format_multiple(dec!(6.375)), "6.38x");
        assert_eq!(format_multiple(Decimal::ZERO), "0.00x");
    }
}
