//! Transaction data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moneymatic_shared::types::{TransactionId, UserId};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionType {
    /// Returns the stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses the stored string form; matching is exact.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owner.
    pub user_id: UserId,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Positive amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-text category label.
    pub category: String,
    /// Optional note.
    pub description: Option<String>,
    /// Day the transaction occurred.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Whether this is an expense.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_type_parse_is_exact() {
        assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("expense"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("Expense"), None);
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_serializes_type_and_date() {
        let now = Utc::now();
        let tx = Transaction {
            id: TransactionId::new(),
            user_id: UserId::new(),
            transaction_type: TransactionType::Expense,
            amount: dec!(42.5),
            category: "Food".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], serde_json::json!(42.5));
        assert_eq!(value["date"], "2024-03-05");
        assert!(value.get("userId").is_some());
        assert!(tx.is_expense());
    }
}
