//! Budget payload validation.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::period::MAX_YEAR;
use super::types::BudgetPeriod;
use crate::input::{is_blank, parse_int, parse_positive_amount};

/// Reasons a budget payload is rejected. Display strings go to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetValidationError {
    /// A required field is absent or blank.
    #[error("Please provide category, limit, month, and year")]
    MissingFields,

    /// Limit is not a positive number.
    #[error("Limit must be a positive number")]
    InvalidLimit,

    /// Month is not an integer in 1-12.
    #[error("Month must be between 1 and 12")]
    InvalidMonth,

    /// Year is not an integer in 1-9999.
    #[error("Year must be between 1 and 9999")]
    InvalidYear,

    /// Period is not a known kind.
    #[error("Period must be one of: monthly, weekly, yearly")]
    InvalidPeriod,

    /// Category was set to an empty string.
    #[error("Category cannot be empty")]
    EmptyCategory,
}

/// Raw create/update body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetPayload {
    /// Category label.
    pub category: Option<String>,
    /// Number or numeric string.
    pub limit: Option<Value>,
    /// `monthly` (default), `weekly` or `yearly`.
    pub period: Option<String>,
    /// Month, number or numeric string.
    pub month: Option<Value>,
    /// Year, number or numeric string.
    pub year: Option<Value>,
}

/// A validated budget ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBudget {
    /// Category label.
    pub category: String,
    /// Positive limit.
    pub limit: Decimal,
    /// Period kind.
    pub period: BudgetPeriod,
    /// Month (1-12).
    pub month: u32,
    /// Year.
    pub year: i32,
}

/// A validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetChanges {
    /// New category.
    pub category: Option<String>,
    /// New limit.
    pub limit: Option<Decimal>,
    /// New period kind.
    pub period: Option<BudgetPeriod>,
    /// New month.
    pub month: Option<u32>,
    /// New year.
    pub year: Option<i32>,
}

fn month_of(value: &Value) -> Result<u32, BudgetValidationError> {
    parse_int(value)
        .and_then(|m| u32::try_from(m).ok())
        .filter(|m| (1..=12).contains(m))
        .ok_or(BudgetValidationError::InvalidMonth)
}

fn year_of(value: &Value) -> Result<i32, BudgetValidationError> {
    parse_int(value)
        .filter(|y| (1..=MAX_YEAR).contains(y))
        .ok_or(BudgetValidationError::InvalidYear)
}

fn period_of(raw: &str) -> Result<BudgetPeriod, BudgetValidationError> {
    BudgetPeriod::parse(raw).ok_or(BudgetValidationError::InvalidPeriod)
}

impl BudgetPayload {
    /// Validates a create request.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn into_new(self) -> Result<NewBudget, BudgetValidationError> {
        let Some(category) = self.category.filter(|c| !c.trim().is_empty()) else {
            return Err(BudgetValidationError::MissingFields);
        };
        let (Some(limit), Some(month), Some(year)) = (self.limit, self.month, self.year) else {
            return Err(BudgetValidationError::MissingFields);
        };
        if [&limit, &month, &year].into_iter().any(|v| is_blank(Some(v))) {
            return Err(BudgetValidationError::MissingFields);
        }

        let limit = parse_positive_amount(&limit).ok_or(BudgetValidationError::InvalidLimit)?;
        let period = match self.period.as_deref() {
            None | Some("") => BudgetPeriod::Monthly,
            Some(raw) => period_of(raw)?,
        };

        Ok(NewBudget {
            category,
            limit,
            period,
            month: month_of(&month)?,
            year: year_of(&year)?,
        })
    }

    /// Validates an update request; only present fields are checked.
    ///
    /// # Errors
    ///
    /// Returns the first rule a present field breaks.
    pub fn into_changes(self) -> Result<BudgetChanges, BudgetValidationError> {
        let category = match self.category {
            Some(c) if c.trim().is_empty() => return Err(BudgetValidationError::EmptyCategory),
            other => other,
        };
        let limit = self
            .limit
            .filter(|v| !v.is_null())
            .map(|v| parse_positive_amount(&v).ok_or(BudgetValidationError::InvalidLimit))
            .transpose()?;

        Ok(BudgetChanges {
            category,
            limit,
            period: self.period.as_deref().map(period_of).transpose()?,
            month: self
                .month
                .filter(|v| !v.is_null())
                .as_ref()
                .map(month_of)
                .transpose()?,
            year: self
                .year
                .filter(|v| !v.is_null())
                .as_ref()
                .map(year_of)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn payload(value: Value) -> BudgetPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_create_defaults_to_monthly() {
        let budget = payload(json!({
            "category": "Food",
            "limit": "500",
            "month": "3",
            "year": 2024
        }))
        .into_new()
        .unwrap();

        assert_eq!(
            budget,
            NewBudget {
                category: "Food".to_string(),
                limit: dec!(500),
                period: BudgetPeriod::Monthly,
                month: 3,
                year: 2024,
            }
        );
    }

    #[test]
    fn test_create_keeps_other_periods() {
        let budget = payload(json!({
            "category": "Travel",
            "limit": 1200,
            "period": "yearly",
            "month": 1,
            "year": 2025
        }))
        .into_new()
        .unwrap();
        assert_eq!(budget.period, BudgetPeriod::Yearly);
    }

    #[rstest]
    #[case(json!({"limit": 5, "month": 1, "year": 2024}), BudgetValidationError::MissingFields)]
    #[case(json!({"category": "Food", "month": 1, "year": 2024}), BudgetValidationError::MissingFields)]
    #[case(json!({"category": "Food", "limit": 5, "month": "", "year": 2024}), BudgetValidationError::MissingFields)]
    #[case(json!({"category": "Food", "limit": -5, "month": 1, "year": 2024}), BudgetValidationError::InvalidLimit)]
    #[case(json!({"category": "Food", "limit": 5, "month": 13, "year": 2024}), BudgetValidationError::InvalidMonth)]
    #[case(json!({"category": "Food", "limit": 5, "month": 0, "year": 2024}), BudgetValidationError::InvalidMonth)]
    #[case(json!({"category": "Food", "limit": 5, "month": 1, "year": "soon"}), BudgetValidationError::InvalidYear)]
    #[case(json!({"category": "Food", "limit": 5, "period": "daily", "month": 1, "year": 2024}), BudgetValidationError::InvalidPeriod)]
    fn test_invalid_create(#[case] body: Value, #[case] expected: BudgetValidationError) {
        assert_eq!(payload(body).into_new().unwrap_err(), expected);
    }

    #[test]
    fn test_partial_update() {
        let changes = payload(json!({"limit": "750.5", "month": 4}))
            .into_changes()
            .unwrap();

        assert_eq!(
            changes,
            BudgetChanges {
                limit: Some(dec!(750.5)),
                month: Some(4),
                ..Default::default()
            }
        );
    }

    #[rstest]
    #[case(json!({"category": ""}), BudgetValidationError::EmptyCategory)]
    #[case(json!({"limit": "abc"}), BudgetValidationError::InvalidLimit)]
    #[case(json!({"month": 14}), BudgetValidationError::InvalidMonth)]
    #[case(json!({"period": "hourly"}), BudgetValidationError::InvalidPeriod)]
    fn test_invalid_update(#[case] body: Value, #[case] expected: BudgetValidationError) {
        assert_eq!(payload(body).into_changes().unwrap_err(), expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            BudgetValidationError::MissingFields.to_string(),
            "Please provide category, limit, month, and year"
        );
        assert_eq!(
            BudgetValidationError::InvalidLimit.to_string(),
            "Limit must be a positive number"
        );
    }
}
