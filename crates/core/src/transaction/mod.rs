//! Income and expense transactions.

pub mod error;
pub mod query;
pub mod types;
pub mod validation;

pub use error::TransactionError;
pub use query::{
    SortField, SortOrder, TransactionFilter, TransactionListParams, TransactionQuery,
    TransactionSort,
};
pub use types::{Transaction, TransactionType};
pub use validation::{NewTransaction, TransactionChanges, TransactionPayload};
