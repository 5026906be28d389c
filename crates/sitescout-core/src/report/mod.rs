pub mod dashboard;
pub mod document;
pub mod format;

pub use dashboard::{build_dashboard, dashboard_view, DashboardState, DashboardView, MetricCard};
pub use document::{assemble_report, location_label, ReportDocument};
