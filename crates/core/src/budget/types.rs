//! Budget data types and the analytics report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

use moneymatic_shared::types::{BudgetId, UserId};

use super::period::ReportPeriod;

/// Budget period kind.
///
/// Only `Monthly` budgets are evaluated by the analytics report; the other
/// kinds are stored as entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Calendar month.
    #[default]
    Monthly,
    /// Calendar week.
    Weekly,
    /// Calendar year.
    Yearly,
}

impl BudgetPeriod {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Yearly => "yearly",
        }
    }

    /// Parses the stored string form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "monthly" => Some(Self::Monthly),
            "weekly" => Some(Self::Weekly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spending limit for one category and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owner.
    pub user_id: UserId,
    /// Category label, matched exactly against transactions.
    pub category: String,
    /// Spending limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub limit: Decimal,
    /// Period kind.
    pub period: BudgetPeriod,
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Income, expense and savings totals for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Sum of income amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    /// Sum of expense amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    #[serde(with = "rust_decimal::serde::float")]
    pub savings: Decimal,
}

/// A budget enriched with the period's actual spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAnalysis {
    /// Budget ID.
    pub id: BudgetId,
    /// Category label.
    pub category: String,
    /// Spending limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub limit: Decimal,
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
    /// Period kind.
    pub period: BudgetPeriod,
    /// Expenses in the budget's category during the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub actual_spending: Decimal,
    /// `limit - actual_spending`; negative when over budget.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
    /// `actual_spending / limit * 100`, two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage_used: Decimal,
    /// True when `actual_spending > limit`.
    pub is_over_budget: bool,
}

/// Budget analytics report for one user and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    /// Resolved period.
    pub period: ReportPeriod,
    /// Totals.
    pub summary: ReportSummary,
    /// Expense totals keyed by category.
    #[serde(serialize_with = "serialize_amount_map")]
    pub spending_by_category: BTreeMap<String, Decimal>,
    /// Monthly budgets for the period, in store order.
    pub budgets: Vec<BudgetAnalysis>,
}

fn serialize_amount_map<S>(map: &BTreeMap<String, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        map.iter()
            .map(|(category, amount)| (category, amount.to_f64().unwrap_or_default())),
    )
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_period_parse_and_display() {
        assert_eq!(BudgetPeriod::parse("weekly"), Some(BudgetPeriod::Weekly));
        assert_eq!(BudgetPeriod::parse("Monthly"), None);
        assert_eq!(BudgetPeriod::Yearly.to_string(), "yearly");
        assert_eq!(BudgetPeriod::default(), BudgetPeriod::Monthly);
    }

    #[test]
    fn test_report_serializes_amounts_as_numbers() {
        let report = BudgetReport {
            period: ReportPeriod { month: 3, year: 2024 },
            summary: ReportSummary {
                total_income: dec!(3000),
                total_expenses: dec!(570.25),
                savings: dec!(2429.75),
            },
            spending_by_category: BTreeMap::from([("Food".to_string(), dec!(570.25))]),
            budgets: Vec::new(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "period": { "month": 3, "year": 2024 },
                "summary": { "totalIncome": 3000.0, "totalExpenses": 570.25, "savings": 2429.75 },
                "spendingByCategory": { "Food": 570.25 },
                "budgets": []
            })
        );
    }
}
