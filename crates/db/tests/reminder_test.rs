//! Integration tests for the reminder repository.

mod common;

use chrono::NaiveDate;
use moneymatic_core::reminder::{ReminderDraft, ReminderFrequency};
use moneymatic_db::ReminderRepository;
use rust_decimal_macros::dec;

fn draft(title: &str, day: u32, is_active: bool) -> ReminderDraft {
    ReminderDraft {
        title: title.to_string(),
        amount: None,
        due_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        frequency: ReminderFrequency::OneTime,
        is_active,
        notes: None,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_orders_by_due_date_and_filters() {
    let db = common::setup().await;
    let repo = ReminderRepository::new(db.clone());
    let user = common::create_user(&db).await;

    repo.create(user.id, draft("Rent", 20, true)).await.unwrap();
    repo.create(user.id, draft("Phone", 3, true)).await.unwrap();
    repo.create(user.id, draft("Gym", 10, false)).await.unwrap();

    let all = repo.list(user.id, None).await.unwrap();
    let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Phone", "Gym", "Rent"]);

    let inactive = repo.list(user.id, Some(false)).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].title, "Gym");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_replace_requires_ownership() {
    let db = common::setup().await;
    let repo = ReminderRepository::new(db.clone());
    let user = common::create_user(&db).await;
    let stranger = common::create_user(&db).await;

    let created = repo.create(user.id, draft("Rent", 1, true)).await.unwrap();

    let replacement = ReminderDraft {
        amount: Some(dec!(1200)),
        frequency: ReminderFrequency::Monthly,
        ..draft("Rent", 1, true)
    };
    assert!(
        repo.replace(stranger.id, created.id.into_inner(), replacement.clone())
            .await
            .unwrap()
            .is_none()
    );

    let replaced = repo
        .replace(user.id, created.id.into_inner(), replacement)
        .await
        .unwrap()
        .expect("Reminder should exist");
    assert_eq!(replaced.amount, Some(dec!(1200)));
    assert_eq!(replaced.frequency, ReminderFrequency::Monthly);
}
