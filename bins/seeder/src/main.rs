//! Database seeder for MoneyMatic development.
//!
//! Creates a demo user with a month of transactions, budgets and bill
//! reminders so the report endpoint has something to show.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use moneymatic_core::{
    auth::hash_password,
    budget::{BudgetPeriod, NewBudget},
    reminder::{ReminderDraft, ReminderFrequency},
    transaction::{NewTransaction, TransactionType},
};
use moneymatic_db::{BudgetRepository, ReminderRepository, TransactionRepository, UserRepository};

const DEMO_EMAIL: &str = "demo@moneymatic.dev";
const DEMO_PASSWORD: &str = "demo1234";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    println!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding demo user...");
    let Some(user_id) = seed_user(&db).await? else {
        println!("  {DEMO_EMAIL} already exists, skipping");
        return Ok(());
    };

    let today = Local::now().date_naive();
    let (year, month) = (today.year(), today.month());
    let day = |d: u32| {
        NaiveDate::from_ymd_opt(year, month, d).with_context(|| format!("invalid day {d}"))
    };

    println!("Seeding transactions...");
    let transactions = TransactionRepository::new(db.clone());
    let entries = [
        (TransactionType::Income, dec!(3000.00), "Salary", "Monthly salary", day(1)?),
        (TransactionType::Expense, dec!(1200.00), "Housing", "Rent", day(2)?),
        (TransactionType::Expense, dec!(400.00), "Food", "Weekly groceries", day(5)?),
        (TransactionType::Expense, dec!(170.00), "Food", "Dinner out", day(12)?),
        (TransactionType::Expense, dec!(65.40), "Transport", "Fuel", day(14)?),
    ];
    for (transaction_type, amount, category, description, date) in entries {
        transactions
            .create(
                user_id,
                NewTransaction {
                    transaction_type,
                    amount,
                    category: category.to_string(),
                    description: Some(description.to_string()),
                    date,
                },
            )
            .await?;
    }

    println!("Seeding budgets...");
    let budgets = BudgetRepository::new(db.clone());
    for (category, limit) in [("Food", dec!(500.00)), ("Housing", dec!(1200.00))] {
        budgets
            .create(
                user_id,
                NewBudget {
                    category: category.to_string(),
                    limit,
                    period: BudgetPeriod::Monthly,
                    month,
                    year,
                },
            )
            .await?;
    }

    println!("Seeding reminders...");
    let reminders = ReminderRepository::new(db.clone());
    let next_month = day(1)?
        .checked_add_months(chrono::Months::new(1))
        .context("date out of range")?;
    let drafts = [
        draft("Rent", Some(dec!(1200.00)), next_month, ReminderFrequency::Monthly),
        draft("Car insurance", Some(dec!(480.00)), day(28)?, ReminderFrequency::Yearly),
        draft("Dentist", None, day(20)?, ReminderFrequency::OneTime),
    ];
    for reminder in drafts {
        reminders.create(user_id, reminder).await?;
    }

    println!("Seeding complete! Log in as {DEMO_EMAIL} / {DEMO_PASSWORD}");
    Ok(())
}

/// Creates the demo user. Returns `None` when it already exists.
async fn seed_user(db: &DatabaseConnection) -> anyhow::Result<Option<Uuid>> {
    let users = UserRepository::new(db.clone());
    if users.email_exists(DEMO_EMAIL).await? {
        return Ok(None);
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;
    let user = users.create("Demo User", DEMO_EMAIL, &password_hash).await?;
    Ok(Some(user.id))
}

fn draft(
    title: &str,
    amount: Option<Decimal>,
    due_date: NaiveDate,
    frequency: ReminderFrequency,
) -> ReminderDraft {
    ReminderDraft {
        title: title.to_string(),
        amount,
        due_date,
        frequency,
        is_active: true,
        notes: None,
    }
}
