//! Core business logic for MoneyMatic.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing and password policy
//! - `budget` - Budget validation and the monthly budget analytics report
//! - `transaction` - Income/expense records, validation, and list queries
//! - `reminder` - Bill reminders and their recurrence
//! - `input` - Lenient parsing of client-supplied numbers and dates

pub mod auth;
pub mod budget;
pub mod input;
pub mod reminder;
pub mod transaction;
