pub mod assumptions;
pub mod model;
pub mod projection;
pub mod verdict;

pub use assumptions::BusinessAssumptions;
pub use model::{
    analyze_site_feasibility, compute_financial_report, CostBreakdown, CostCategory,
    FinancialReport, BREAKEVEN_SENTINEL_MONTHS,
};
pub use verdict::Verdict;
