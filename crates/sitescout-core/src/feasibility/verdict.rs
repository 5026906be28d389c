use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::feasibility::assumptions::BusinessAssumptions;
use crate::feasibility::model::FinancialReport;
use crate::math::checked_ratio;
use crate::types::Multiple;

/// Share of the ticket price assumed to be available to pay rent.
///
/// Fixed at 30% and deliberately independent of `cogs_pct`.
pub const RENT_CONTRIBUTION_RATE: Decimal = dec!(0.3);

/// Investment tier derived from rent coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    #[serde(rename = "Cautious Hold")]
    CautiousHold,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Verdict {
    /// Above 4x is a strong buy, 2x up to and including 4x a cautious hold,
    /// anything below 2x high risk.
    pub fn from_rent_coverage(ratio: Multiple) -> Self {
        if ratio > dec!(4) {
            Verdict::StrongBuy
        } else if ratio >= dec!(2) {
            Verdict::CautiousHold
        } else {
            Verdict::HighRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::StrongBuy => "Strong Buy",
            Verdict::CautiousHold => "Cautious Hold",
            Verdict::HighRisk => "High Risk",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Monthly orders needed to cover rent: `ceil(rent / (ticket * 0.3))`.
///
/// `None` when the ticket price is zero and the quantity is undefined.
pub fn rent_cover_orders(report: &FinancialReport, input: &BusinessAssumptions) -> Option<Decimal> {
    checked_ratio(
        report.monthly_rent,
        input.avg_ticket_price * RENT_CONTRIBUTION_RATE,
    )
    .map(|orders| orders.ceil())
}

/// One-paragraph insight comparing rent-cover orders with the projection.
pub fn verdict_insight(report: &FinancialReport, input: &BusinessAssumptions) -> String {
    let head = format!(
        "Based on a {} PSF rent and {} ticket size,",
        input.rent_per_sqft.normalize(),
        input.avg_ticket_price.normalize()
    );
    match rent_cover_orders(report, input) {
        Some(orders) => format!(
            "{head} you need {} orders/month just to cover rent. Your current projection is {} orders.",
            orders.normalize(),
            input.monthly_orders()
        ),
        None => format!(
            "{head} the orders needed to cover rent are undefined. Your current projection is {} orders.",
            input.monthly_orders()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::model::compute_financial_report;
    use rust_decimal_macros::dec;

    #[test]
    fn test_verdict_tiers() {
        assert_eq!(Verdict::from_rent_coverage(dec!(6.375)), Verdict::StrongBuy);
        assert_eq!(Verdict::from_rent_coverage(dec!(3)), Verdict::CautiousHold);
        assert_eq!(Verdict::from_rent_coverage(dec!(1.5)), Verdict::HighRisk);
        assert_eq!(Verdict::from_rent_coverage(Decimal::ZERO), Verdict::HighRisk);
    }

    #[test]
    fn test_verdict_boundaries_belong_to_cautious_hold() {
        assert_eq!(Verdict::from_rent_coverage(dec!(4.0)), Verdict::CautiousHold);
        assert_eq!(Verdict::from_rent_coverage(dec!(4.0001)), Verdict::StrongBuy);
        assert_eq!(Verdict::from_rent_coverage(dec!(2.0)), Verdict::CautiousHold);
        assert_eq!(Verdict::from_rent_coverage(dec!(1.9999)), Verdict::HighRisk);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        let v = serde_json::to_value(Verdict::CautiousHold).unwrap();
        assert_eq!(v, "Cautious Hold");
        assert_eq!(Verdict::HighRisk.to_string(), "High Risk");
    }

    #[test]
    fn test_rent_cover_orders_rounds_up() {
        let input = BusinessAssumptions::default();
        let report = compute_financial_report(&input);
        // 180000 / 135 = 1333.33.. => 1334
        assert_eq!(rent_cover_orders(&report, &input), Some(dec!(1334)));
    }

    #[test]
    fn test_rent_cover_orders_ignores_cogs_pct() {
        let mut input = BusinessAssumptions::default();
        input.cogs_pct = dec!(45);
        let report = compute_financial_report(&input);
        assert_eq!(rent_cover_orders(&report, &input), Some(dec!(1334)));
    }

    #[test]
    fn test_rent_cover_orders_undefined_for_zero_ticket() {
        let mut input = BusinessAssumptions::default();
        input.avg_ticket_price = Decimal::ZERO;
        let report = compute_financial_report(&input);
        assert_eq!(rent_cover_orders(&report, &input), None);
        assert!(verdict_insight(&report, &input).contains("undefined"));
    }

    #[test]
    fn test_verdict_insight_text() {
        let input = BusinessAssumptions::default();
        let report = compute_financial_report(&input);
        assert_eq!(
            verdict_insight(&report, &input),
            "Based on a 150 PSF rent and 450 ticket size, you need 1334 orders/month \
             just to cover rent. Your current projection is 2550 orders."
        );
    }
}
