//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - The minimum password policy for password changes

mod password;

pub use password::{PasswordError, burn_verification, hash_password, verify_password};

/// Minimum number of characters accepted for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Returns true if `password` satisfies the password policy.
#[must_use]
pub fn is_acceptable_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_policy() {
        assert!(!is_acceptable_password(""));
        assert!(!is_acceptable_password("abcde"));
        assert!(is_acceptable_password("abcdef"));
        // Counted in characters, not bytes.
        assert!(!is_acceptable_password("ééééé"));
    }
}
