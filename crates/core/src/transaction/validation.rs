//! Transaction payload validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::TransactionError;
use super::types::TransactionType;
use crate::input::{is_blank, parse_date, parse_positive_amount};

/// Raw create/update body. Every field is optional so that validation,
/// not deserialization, decides what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionPayload {
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Number or numeric string.
    pub amount: Option<Value>,
    /// Category label.
    pub category: Option<String>,
    /// Optional note; an empty string clears it.
    pub description: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339.
    pub date: Option<String>,
}

/// A validated transaction ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Positive amount in cents precision.
    pub amount: Decimal,
    /// Category label.
    pub category: String,
    /// Optional note.
    pub description: Option<String>,
    /// Occurrence date.
    pub date: NaiveDate,
}

/// A validated partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionChanges {
    /// New type.
    pub transaction_type: Option<TransactionType>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New category.
    pub category: Option<String>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New date.
    pub date: Option<NaiveDate>,
}

impl TransactionPayload {
    /// Validates a create request.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks, checking presence first,
    /// then type, amount and date.
    pub fn into_new(self) -> Result<NewTransaction, TransactionError> {
        let (Some(raw_type), Some(category), Some(raw_date)) = (
            self.transaction_type.filter(|s| !s.is_empty()),
            self.category.filter(|s| !s.trim().is_empty()),
            self.date.filter(|s| !s.trim().is_empty()),
        ) else {
            return Err(TransactionError::MissingFields);
        };
        if is_blank(self.amount.as_ref()) {
            return Err(TransactionError::MissingFields);
        }

        let transaction_type =
            TransactionType::parse(&raw_type).ok_or(TransactionError::InvalidType)?;
        let amount = self
            .amount
            .as_ref()
            .and_then(parse_positive_amount)
            .ok_or(TransactionError::InvalidAmount)?;
        let date = parse_date(&raw_date).ok_or(TransactionError::InvalidDate)?;

        Ok(NewTransaction {
            transaction_type,
            amount,
            category,
            description: self.description.filter(|d| !d.is_empty()),
            date,
        })
    }

    /// Validates an update request; only present fields are checked.
    ///
    /// # Errors
    ///
    /// Returns the first rule a present field breaks.
    pub fn into_changes(self) -> Result<TransactionChanges, TransactionError> {
        let transaction_type = self
            .transaction_type
            .map(|t| TransactionType::parse(&t).ok_or(TransactionError::InvalidType))
            .transpose()?;
        let amount = self
            .amount
            .filter(|v| !v.is_null())
            .map(|v| parse_positive_amount(&v).ok_or(TransactionError::InvalidAmount))
            .transpose()?;
        let category = self
            .category
            .map(|c| {
                if c.trim().is_empty() {
                    Err(TransactionError::EmptyCategory)
                } else {
                    Ok(c)
                }
            })
            .transpose()?;
        let date = self
            .date
            .map(|d| parse_date(&d).ok_or(TransactionError::InvalidDate))
            .transpose()?;

        Ok(TransactionChanges {
            transaction_type,
            amount,
            category,
            description: self.description.map(|d| Some(d).filter(|d| !d.is_empty())),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn payload(value: Value) -> TransactionPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_create() {
        let tx = payload(json!({
            "type": "expense",
            "amount": "45.20",
            "category": "Food",
            "description": "",
            "date": "2024-03-10"
        }))
        .into_new()
        .unwrap();

        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.amount, dec!(45.20));
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.description, None);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[rstest]
    #[case(json!({"amount": 1, "category": "Food", "date": "2024-03-10"}), TransactionError::MissingFields)]
    #[case(json!({"type": "income", "category": "Pay", "date": "2024-03-10"}), TransactionError::MissingFields)]
    #[case(json!({"type": "income", "amount": "", "category": "Pay", "date": "2024-03-10"}), TransactionError::MissingFields)]
    #[case(json!({"type": "gift", "amount": 1, "category": "Pay", "date": "2024-03-10"}), TransactionError::InvalidType)]
    #[case(json!({"type": "income", "amount": -3, "category": "Pay", "date": "2024-03-10"}), TransactionError::InvalidAmount)]
    #[case(json!({"type": "income", "amount": "ten", "category": "Pay", "date": "2024-03-10"}), TransactionError::InvalidAmount)]
    #[case(json!({"type": "income", "amount": 10, "category": "Pay", "date": "yesterday"}), TransactionError::InvalidDate)]
    fn test_invalid_create(#[case] body: Value, #[case] expected: TransactionError) {
        assert_eq!(payload(body).into_new().unwrap_err(), expected);
    }

    #[test]
    fn test_partial_update() {
        let changes = payload(json!({"amount": 12, "description": ""}))
            .into_changes()
            .unwrap();

        assert_eq!(changes.amount, Some(dec!(12)));
        assert_eq!(changes.description, Some(None));
        assert!(changes.transaction_type.is_none());
        assert!(changes.category.is_none());
        assert!(changes.date.is_none());
    }

    #[rstest]
    #[case(json!({"type": "refund"}), TransactionError::InvalidType)]
    #[case(json!({"amount": 0}), TransactionError::InvalidAmount)]
    #[case(json!({"category": " "}), TransactionError::EmptyCategory)]
    #[case(json!({"date": "2024-13-01"}), TransactionError::InvalidDate)]
    fn test_invalid_update(#[case] body: Value, #[case] expected: TransactionError) {
        assert_eq!(payload(body).into_changes().unwrap_err(), expected);
    }
}
