use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::feasibility::assumptions::BusinessAssumptions;
use crate::feasibility::verdict::Verdict;
use crate::math::{safe_div, safe_pct};
use crate::types::{with_metadata, ComputationOutput, Money, Multiple, Percent};

/// Reported break-even when the site never pays back (net profit <= 0).
///
/// This is a marker, not a duration; use [`FinancialReport::payback_months`]
/// to get an explicit `None` instead.
pub const BREAKEVEN_SENTINEL_MONTHS: Decimal = dec!(999);

/// Days in a modelled month.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// Miscellaneous operating cost as a fraction of revenue.
pub const MISC_COST_RATE: Decimal = dec!(0.05);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Cost line in the monthly breakdown. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    Rent,
    #[serde(rename = "COGS")]
    Cogs,
    Staff,
    Misc,
}

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        CostCategory::Rent,
        CostCategory::Cogs,
        CostCategory::Staff,
        CostCategory::Misc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Rent => "Rent",
            CostCategory::Cogs => "COGS",
            CostCategory::Staff => "Staff",
            CostCategory::Misc => "Misc",
        }
    }
}

/// Monthly cost breakdown, serialized with fixed keys in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(rename = "Rent")]
    pub rent: Money,
    #[serde(rename = "COGS")]
    pub cogs: Money,
    #[serde(rename = "Staff")]
    pub staff: Money,
    #[serde(rename = "Misc")]
    pub misc: Money,
}

impl CostBreakdown {
    pub fn get(&self, category: CostCategory) -> Money {
        match category {
            CostCategory::Rent => self.rent,
            CostCategory::Cogs => self.cogs,
            CostCategory::Staff => self.staff,
            CostCategory::Misc => self.misc,
        }
    }

    /// (category, amount) pairs in display order.
    pub fn entries(&self) -> [(CostCategory, Money); 4] {
        CostCategory::ALL.map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> Money {
        self.rent
            .saturating_add(self.cogs)
            .saturating_add(self.staff)
            .saturating_add(self.misc)
    }
}

/// Monthly financial metrics derived from one set of business assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// daily_orders * avg_ticket_price * 30
    pub monthly_revenue: Money,
    /// area_sqft * rent_per_sqft
    pub monthly_rent: Money,
    /// monthly_revenue * cogs_pct / 100
    pub monthly_cogs: Money,
    /// monthly_revenue * 5%
    pub misc_cost: Money,
    /// rent + staff + misc
    pub monthly_opex: Money,
    /// revenue - cogs - opex (EBITDA)
    pub net_profit: Money,
    /// net_profit / revenue * 100, 0 without revenue
    pub margin_pct: Percent,
    /// capital / net_profit, or 999 when net_profit <= 0
    pub breakeven_months: Decimal,
    /// revenue / rent, 0 without rent
    pub rent_coverage_ratio: Multiple,
    /// opex / revenue * 100, 0 without revenue
    pub opex_ratio_pct: Percent,
    /// net_profit * 12 / capital * 100, 0 without capital
    pub cash_on_cash_return_pct: Percent,
    pub cost_breakdown: CostBreakdown,
}

impl FinancialReport {
    /// Months to recover capital, or `None` when the site never breaks even.
    pub fn payback_months(&self) -> Option<Decimal> {
        if self.net_profit > Decimal::ZERO {
            Some(self.breakeven_months)
        } else {
            None
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_rent_coverage(self.rent_coverage_ratio)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Convert business assumptions into the monthly financial report.
///
/// Revenue and rent are computed first; every other metric derives from
/// them. Each division is guarded and every product saturates at the
/// `Decimal` bounds, so any input produces a complete report.
pub fn compute_financial_report(input: &BusinessAssumptions) -> FinancialReport {
    let monthly_revenue = Decimal::from(input.daily_orders)
        .saturating_mul(input.avg_ticket_price)
        .saturating_mul(DAYS_PER_MONTH);
    let monthly_rent = input.area_sqft.saturating_mul(input.rent_per_sqft);

    let monthly_cogs = monthly_revenue.saturating_mul(input.cogs_pct / Decimal::ONE_HUNDRED);
    let misc_cost = monthly_revenue.saturating_mul(MISC_COST_RATE);
    let monthly_opex = monthly_rent
        .saturating_add(input.monthly_staff_cost)
        .saturating_add(misc_cost);

    let net_profit = monthly_revenue
        .saturating_sub(monthly_cogs)
        .saturating_sub(monthly_opex);
    let margin_pct = safe_pct(net_profit, monthly_revenue);

    let breakeven_months = if net_profit > Decimal::ZERO {
        safe_div(input.capital_invested, net_profit, BREAKEVEN_SENTINEL_MONTHS)
    } else {
        BREAKEVEN_SENTINEL_MONTHS
    };

    let rent_coverage_ratio = safe_div(monthly_revenue, monthly_rent, Decimal::ZERO);
    let opex_ratio_pct = safe_pct(monthly_opex, monthly_revenue);
    let cash_on_cash_return_pct =
        safe_pct(net_profit.saturating_mul(dec!(12)), input.capital_invested);

    FinancialReport {
        monthly_revenue,
        monthly_rent,
        monthly_cogs,
        misc_cost,
        monthly_opex,
        net_profit,
        margin_pct,
        breakeven_months,
        rent_coverage_ratio,
        opex_ratio_pct,
        cash_on_cash_return_pct,
        cost_breakdown: CostBreakdown {
            rent: monthly_rent,
            cogs: monthly_cogs,
            staff: input.monthly_staff_cost,
            misc: misc_cost,
        },
    }
}

/// Run the engine and wrap the report in the standard output envelope,
/// with a warning for every degenerate branch that was taken.
pub fn analyze_site_feasibility(
    input: &BusinessAssumptions,
) -> ComputationOutput<FinancialReport> {
    let start = Instant::now();
    let report = compute_financial_report(input);
    let warnings = degenerate_input_warnings(input, &report);
    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Site Feasibility: 30-day revenue model with fixed-rate COGS and misc opex",
        input,
        warnings,
        elapsed,
        report,
    )
}

/// True when revenue, rent or the derived costs exceed the `Decimal` range
/// and the report carries saturated values.
fn exceeds_decimal_range(input: &BusinessAssumptions) -> bool {
    let revenue = Decimal::from(input.daily_orders)
        .checked_mul(input.avg_ticket_price)
        .and_then(|r| r.checked_mul(DAYS_PER_MONTH));
    let rent = input.area_sqft.checked_mul(input.rent_per_sqft);
    let (Some(revenue), Some(rent)) = (revenue, rent) else {
        return true;
    };
    let cogs = revenue.checked_mul(input.cogs_pct / Decimal::ONE_HUNDRED);
    let misc = revenue.checked_mul(MISC_COST_RATE);
    let net_profit = cogs.zip(misc).and_then(|(cogs, misc)| {
        let opex = rent.checked_add(input.monthly_staff_cost)?.checked_add(misc)?;
        revenue.checked_sub(cogs)?.checked_sub(opex)
    });
    match net_profit {
        Some(profit) => profit.checked_mul(dec!(12)).is_none(),
        None => true,
    }
}

fn degenerate_input_warnings(input: &BusinessAssumptions, report: &FinancialReport) -> Vec<String> {
    let mut warnings = Vec::new();

    if exceeds_decimal_range(input) {
        warnings.push(
            "Inputs exceed the representable range; affected figures are clamped to the Decimal bounds"
                .to_string(),
        );
    }

    if report.monthly_revenue.is_zero() {
        warnings.push(
            "Monthly revenue is zero; margin, OPEX ratio and rent coverage reported as 0"
                .to_string(),
        );
    }
    if report.monthly_rent.is_zero() {
        warnings.push("Monthly rent is zero; rent coverage reported as 0".to_string());
    }
    if input.capital_invested.is_zero() {
        warnings.push("Capital invested is zero; cash-on-cash return reported as 0".to_string());
    }
    if report.net_profit <= Decimal::ZERO {
        warnings.push(format!(
            "Net profit is {}; no finite break-even (reported as {})",
            report.net_profit.round_dp(2),
            BREAKEVEN_SENTINEL_MONTHS
        ));
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
