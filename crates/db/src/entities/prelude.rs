//! Entity re-exports.

pub use super::budgets::Entity as Budgets;
pub use super::reminders::Entity as Reminders;
pub use super::transactions::Entity as Transactions;
pub use super::users::Entity as Users;
