//! Budgets and the monthly budget analytics report.

pub mod clock;
pub mod error;
pub mod period;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;


pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AnalyticsError, DUPLICATE_BUDGET_MESSAGE};
pub use period::{DateRange, ReportPeriod};
pub use service::{BudgetAnalyticsService, analyze_budget, build_report};
pub use store::BudgetAnalyticsStore;
pub use types::{Budget, BudgetAnalysis, BudgetPeriod, BudgetReport, ReportSummary};
pub use validation::{BudgetChanges, BudgetPayload, BudgetValidationError, NewBudget};
