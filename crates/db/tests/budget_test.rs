//! Integration tests for budgets and the analytics store.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use moneymatic_core::budget::{
    AnalyticsError, BudgetAnalyticsService, BudgetChanges, BudgetPeriod, FixedClock, NewBudget,
};
use moneymatic_core::transaction::{NewTransaction, TransactionType};
use moneymatic_db::{BudgetRepoError, BudgetRepository, SeaOrmAnalyticsStore, TransactionRepository};
use moneymatic_shared::types::UserId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn food_budget(limit: Decimal, period: BudgetPeriod) -> NewBudget {
    NewBudget {
        category: "Food".to_string(),
        limit,
        period,
        month: 3,
        year: 2024,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_budget_rejected() {
    let db = common::setup().await;
    let repo = BudgetRepository::new(db.clone());
    let user = common::create_user(&db).await;

    repo.create(user.id, food_budget(dec!(500), BudgetPeriod::Monthly))
        .await
        .unwrap();

    let duplicate = repo
        .create(user.id, food_budget(dec!(300), BudgetPeriod::Monthly))
        .await;
    assert!(matches!(duplicate, Err(BudgetRepoError::Duplicate)));

    let as_analytics: AnalyticsError = duplicate.unwrap_err().into();
    assert!(matches!(as_analytics, AnalyticsError::IntegrityViolation(_)));

    // Same category with another period kind is a different budget.
    repo.create(user.id, food_budget(dec!(100), BudgetPeriod::Weekly))
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_concurrent_duplicates_leave_one_row() {
    let db = common::setup().await;
    let repo = BudgetRepository::new(db.clone());
    let user = common::create_user(&db).await;

    let attempts = (0..5).map(|_| repo.create(user.id, food_budget(dec!(500), BudgetPeriod::Monthly)));
    let results = join_all(attempts).await;

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, BudgetRepoError::Duplicate))
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_update_into_existing_period_is_duplicate() {
    let db = common::setup().await;
    let repo = BudgetRepository::new(db.clone());
    let user = common::create_user(&db).await;

    repo.create(user.id, food_budget(dec!(500), BudgetPeriod::Monthly))
        .await
        .unwrap();
    let april = repo
        .create(
            user.id,
            NewBudget {
                month: 4,
                ..food_budget(dec!(500), BudgetPeriod::Monthly)
            },
        )
        .await
        .unwrap();

    let result = repo
        .update(
            user.id,
            april.id.into_inner(),
            BudgetChanges {
                month: Some(3),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(BudgetRepoError::Duplicate)));

    let raised = repo
        .update(
            user.id,
            april.id.into_inner(),
            BudgetChanges {
                limit: Some(dec!(650)),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("Budget should exist");
    assert_eq!(raised.limit, dec!(650));

    assert!(repo.delete(user.id, april.id.into_inner()).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_report_against_database() {
    let db = common::setup().await;
    let user = common::create_user(&db).await;
    let transactions = TransactionRepository::new(db.clone());
    let budgets = BudgetRepository::new(db.clone());

    for (kind, amount, category, day) in [
        (TransactionType::Income, dec!(3000), "Salary", 1),
        (TransactionType::Expense, dec!(400), "Food", 5),
        (TransactionType::Expense, dec!(170), "Food", 31),
    ] {
        transactions
            .create(
                user.id,
                NewTransaction {
                    transaction_type: kind,
                    amount,
                    category: category.to_string(),
                    description: None,
                    date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                },
            )
            .await
            .unwrap();
    }
    budgets
        .create(user.id, food_budget(dec!(500), BudgetPeriod::Monthly))
        .await
        .unwrap();
    budgets
        .create(user.id, food_budget(dec!(50), BudgetPeriod::Yearly))
        .await
        .unwrap();

    let service = BudgetAnalyticsService::new(
        Arc::new(SeaOrmAnalyticsStore::new(db.clone())),
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())),
    );
    let report = service
        .compute_budget_report(Some(UserId::from_uuid(user.id)), None, None)
        .await
        .unwrap();

    assert_eq!(report.summary.total_income, dec!(3000));
    assert_eq!(report.summary.total_expenses, dec!(570));
    assert_eq!(report.summary.savings, dec!(2430));
    assert_eq!(report.budgets.len(), 1);
    assert_eq!(report.budgets[0].remaining, dec!(-70));
    assert_eq!(report.budgets[0].percentage_used, dec!(114.00));
    assert!(report.budgets[0].is_over_budget);
}
