//! List query parameters for transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use moneymatic_shared::types::PageRequest;

use super::types::TransactionType;
use crate::input::{non_empty, parse_date, parse_decimal};

/// Raw query string of `GET /transactions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListParams {
    /// Page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// Substring matched against description or category.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// `income` or `expense`; anything else is ignored.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// `date`, `amount`, or anything else for creation time.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    /// Earliest date, inclusive.
    pub start_date: Option<String>,
    /// Latest date, inclusive.
    pub end_date: Option<String>,
    /// Smallest amount, inclusive.
    pub min_amount: Option<String>,
    /// Largest amount, inclusive.
    pub max_amount: Option<String>,
}

/// Row filter for transaction listings. Every set field narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Substring of description or category.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Type.
    pub transaction_type: Option<TransactionType>,
    /// Earliest date, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest date, inclusive.
    pub date_to: Option<NaiveDate>,
    /// Smallest amount, inclusive.
    pub min_amount: Option<Decimal>,
    /// Largest amount, inclusive.
    pub max_amount: Option<Decimal>,
}

/// Column to sort by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Occurrence date.
    #[default]
    Date,
    /// Amount.
    Amount,
    /// Creation timestamp, always descending.
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Sort specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSort {
    /// Column.
    pub field: SortField,
    /// Direction.
    pub order: SortOrder,
}

/// A fully parsed listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Row filter.
    pub filter: TransactionFilter,
    /// Ordering.
    pub sort: TransactionSort,
    /// Page window.
    pub page: PageRequest,
}

impl TransactionSort {
    fn from_raw(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let order = if sort_order == Some("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        };
        match sort_by.unwrap_or("date") {
            "date" => Self { field: SortField::Date, order },
            "amount" => Self { field: SortField::Amount, order },
            _ => Self { field: SortField::CreatedAt, order: SortOrder::Desc },
        }
    }
}

impl TransactionListParams {
    /// Parses the raw query. Unparseable values are dropped rather than
    /// rejected.
    #[must_use]
    pub fn into_query(self) -> TransactionQuery {
        let amount = |raw: Option<&str>| {
            non_empty(raw).and_then(|s| parse_decimal(&Value::String(s.to_string())))
        };
        let date = |raw: Option<&str>| non_empty(raw).and_then(parse_date);

        let filter = TransactionFilter {
            search: self.search.filter(|s| !s.is_empty()),
            category: self.category.filter(|s| !s.is_empty()),
            transaction_type: self
                .transaction_type
                .as_deref()
                .and_then(TransactionType::parse),
            date_from: date(self.start_date.as_deref()),
            date_to: date(self.end_date.as_deref()),
            min_amount: amount(self.min_amount.as_deref()),
            max_amount: amount(self.max_amount.as_deref()),
        };

        TransactionQuery {
            filter,
            sort: TransactionSort::from_raw(
                non_empty(self.sort_by.as_deref()),
                self.sort_order.as_deref(),
            ),
            page: PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let query = TransactionListParams::default().into_query();

        assert_eq!(query.filter, TransactionFilter::default());
        assert_eq!(query.sort, TransactionSort { field: SortField::Date, order: SortOrder::Desc });
        assert_eq!(query.page, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_full_query() {
        let params = TransactionListParams {
            page: Some("2".into()),
            limit: Some("5".into()),
            search: Some("coffee".into()),
            category: Some("Food".into()),
            transaction_type: Some("expense".into()),
            sort_by: Some("amount".into()),
            sort_order: Some("asc".into()),
            start_date: Some("2024-03-01".into()),
            end_date: Some("2024-03-31".into()),
            min_amount: Some("10".into()),
            max_amount: Some("99.5".into()),
        };

        let query = params.into_query();
        assert_eq!(query.filter.search.as_deref(), Some("coffee"));
        assert_eq!(query.filter.category.as_deref(), Some("Food"));
        assert_eq!(query.filter.transaction_type, Some(TransactionType::Expense));
        assert_eq!(query.filter.date_from, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(query.filter.date_to, NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(query.filter.min_amount, Some(dec!(10)));
        assert_eq!(query.filter.max_amount, Some(dec!(99.5)));
        assert_eq!(query.sort, TransactionSort { field: SortField::Amount, order: SortOrder::Asc });
        assert_eq!(query.page.offset(), 5);
    }

    #[test]
    fn test_unknown_type_and_bad_values_ignored() {
        let params = TransactionListParams {
            transaction_type: Some("transfer".into()),
            min_amount: Some("lots".into()),
            start_date: Some("soon".into()),
            ..Default::default()
        };

        assert_eq!(params.into_query().filter, TransactionFilter::default());
    }

    #[rstest]
    #[case(Some("date"), None, SortField::Date, SortOrder::Desc)]
    #[case(Some("amount"), Some("desc"), SortField::Amount, SortOrder::Desc)]
    #[case(Some("category"), Some("asc"), SortField::CreatedAt, SortOrder::Desc)]
    #[case(None, Some("asc"), SortField::Date, SortOrder::Asc)]
    fn test_sort(
        #[case] sort_by: Option<&str>,
        #[case] sort_order: Option<&str>,
        #[case] field: SortField,
        #[case] order: SortOrder,
    ) {
        assert_eq!(
            TransactionSort::from_raw(sort_by, sort_order),
            TransactionSort { field, order }
        );
    }
}
