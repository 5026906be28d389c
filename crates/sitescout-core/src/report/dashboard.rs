use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::feasibility::assumptions::BusinessAssumptions;
use crate::feasibility::model::FinancialReport;
use crate::report::format::{fixed, format_money, format_pct};
use crate::types::Money;

/// Break-even below this many months is shown as healthy.
pub const HEALTHY_BREAKEVEN_MONTHS: Decimal = dec!(18);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// A headline KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub caption: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Income,
    Expense,
    Total,
}

/// One bar of the profitability chart; expenses are negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub item: String,
    pub amount: Money,
    pub kind: BarKind,
}

/// Whether the user has requested an analysis yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardState {
    #[default]
    Idle,
    Active,
}

/// What the dashboard shows for a given state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    Welcome {
        status: Vec<MetricCard>,
    },
    Analysis {
        cards: Vec<MetricCard>,
        profitability: Vec<WaterfallBar>,
    },
}

fn card(label: &str, value: String, caption: String, tone: Tone) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
        caption,
        tone,
    }
}

/// The four headline cards of the analysis view.
pub fn build_dashboard(
    report: &FinancialReport,
    input: &BusinessAssumptions,
    competitor_count: usize,
) -> Vec<MetricCard> {
    let profit_tone = if report.net_profit > Decimal::ZERO {
        Tone::Positive
    } else {
        Tone::Negative
    };
    let breakeven_tone = if report.breakeven_months < HEALTHY_BREAKEVEN_MONTHS {
        Tone::Positive
    } else {
        Tone::Negative
    };
    let breakeven_value = match report.payback_months() {
        Some(months) => fixed(months, 1),
        None => "Never".to_string(),
    };

    vec![
        card(
            "Est. Monthly Revenue",
            format_money(report.monthly_revenue, &input.currency),
            format!("Based on {} daily avg", input.daily_orders),
            Tone::Positive,
        ),
        card(
            "Net Profit (EBITDA)",
            format_money(report.net_profit, &input.currency),
            format!("{} Margin", format_pct(report.margin_pct)),
            profit_tone,
        ),
        card(
            "Break-Even Point",
            breakeven_value,
            "Months".to_string(),
            breakeven_tone,
        ),
        card(
            "Competition Density",
            competitor_count.to_string(),
            "Nearby Rivals".to_string(),
            Tone::Negative,
        ),
    ]
}

/// Revenue, the three largest cost lines, and net profit.
pub fn profitability_waterfall(report: &FinancialReport) -> Vec<WaterfallBar> {
    let bar = |item: &str, amount: Money, kind: BarKind| WaterfallBar {
        item: item.to_string(),
        amount,
        kind,
    };
    let costs = &report.cost_breakdown;
    vec![
        bar("Revenue", report.monthly_revenue, BarKind::Income),
        bar("COGS", -costs.cogs, BarKind::Expense),
        bar("Rent", -costs.rent, BarKind::Expense),
        bar("Staff", -costs.staff, BarKind::Expense),
        bar("Net Profit", report.net_profit, BarKind::Total),
    ]
}

/// Render the dashboard for an explicit application state.
pub fn dashboard_view(
    state: DashboardState,
    report: &FinancialReport,
    input: &BusinessAssumptions,
    competitor_count: usize,
) -> DashboardView {
    match state {
        DashboardState::Idle => DashboardView::Welcome {
            status: vec![
                card("System Status", "ONLINE".into(), String::new(), Tone::Positive),
                card("Financial Engine", "READY".into(), String::new(), Tone::Neutral),
                card("Market Data", "CONNECTED".into(), String::new(), Tone::Neutral),
            ],
        },
        DashboardState::Active => DashboardView::Analysis {
            cards: build_dashboard(report, input, competitor_count),
            profitability: profitability_waterfall(report),
        },
    }
}
