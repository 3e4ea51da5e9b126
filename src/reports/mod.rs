//! Reports module for Expense Saver
//!
//! Storage-backed reports over the analytics layer: the dashboard, a
//! per-period category breakdown, and expense/saving trends.

pub mod breakdown;
pub mod dashboard;
pub mod trend;

pub use breakdown::BreakdownReport;
pub use dashboard::DashboardReport;
pub use trend::TrendReport;
