//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use moneymatic_core::budget::BudgetPeriod as CoreBudgetPeriod;
use moneymatic_core::reminder::ReminderFrequency as CoreReminderFrequency;
use moneymatic_core::transaction::TransactionType as CoreTransactionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_type")]
pub enum TransactionType {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "budget_period")]
pub enum BudgetPeriod {
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "reminder_frequency")]
pub enum ReminderFrequency {
    #[sea_orm(string_value = "one-time")]
    OneTime,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
}

impl From<CoreTransactionType> for TransactionType {
    fn from(value: CoreTransactionType) -> Self {
        match value {
            CoreTransactionType::Income => Self::Income,
            CoreTransactionType::Expense => Self::Expense,
        }
    }
}

impl From<TransactionType> for CoreTransactionType {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl From<CoreBudgetPeriod> for BudgetPeriod {
    fn from(value: CoreBudgetPeriod) -> Self {
        match value {
            CoreBudgetPeriod::Monthly => Self::Monthly,
            CoreBudgetPeriod::Weekly => Self::Weekly,
            CoreBudgetPeriod::Yearly => Self::Yearly,
        }
    }
}

impl From<BudgetPeriod> for CoreBudgetPeriod {
    fn from(value: BudgetPeriod) -> Self {
        match value {
            BudgetPeriod::Monthly => Self::Monthly,
            BudgetPeriod::Weekly => Self::Weekly,
            BudgetPeriod::Yearly => Self::Yearly,
        }
    }
}

impl From<CoreReminderFrequency> for ReminderFrequency {
    fn from(value: CoreReminderFrequency) -> Self {
        match value {
            CoreReminderFrequency::OneTime => Self::OneTime,
            CoreReminderFrequency::Weekly => Self::Weekly,
            CoreReminderFrequency::Monthly => Self::Monthly,
            CoreReminderFrequency::Yearly => Self::Yearly,
        }
    }
}

impl From<ReminderFrequency> for CoreReminderFrequency {
    fn from(value: ReminderFrequency) -> Self {
        match value {
            ReminderFrequency::OneTime => Self::OneTime,
            ReminderFrequency::Weekly => Self::Weekly,
            ReminderFrequency::Monthly => Self::Monthly,
            ReminderFrequency::Yearly => Self::Yearly,
        }
    }
}
