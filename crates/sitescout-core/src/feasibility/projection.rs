use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Horizon of the ROI chart in the investor memo.
pub const DEFAULT_PROJECTION_MONTHS: u32 = 24;

/// Cumulative position at the end of one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowPoint {
    pub month: u32,
    /// -capital + net_profit * month
    pub cumulative_cashflow: Money,
    /// True once the capital has been recovered
    pub recovered: bool,
}

/// Straight-line cumulative cashflow for months `1..=months`.
pub fn project_cumulative_cashflow(
    net_profit: Money,
    capital_invested: Money,
    months: u32,
) -> Vec<CashflowPoint> {
    (1..=months)
        .map(|m| {
            let cumulative_cashflow = net_profit
                .saturating_mul(Decimal::from(m))
                .saturating_sub(capital_invested);
            CashflowPoint {
                month: m,
                cumulative_cashflow,
                recovered: cumulative_cashflow >= Decimal::ZERO,
            }
        })
        .collect()
}

/// First month in the projection where capital has been recovered.
pub fn first_recovered_month(points: &[CashflowPoint]) -> Option<u32> {
    points.iter().find(|p| p.recovered).map(|p| p.month)
}
