//! Field rules applied to account input before anything is stored.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use mf_shared::validation::{validators, ValidationErrors};

use crate::domain::value_objects::AccountInput;

/// Minimum username length in characters
pub const MIN_USERNAME_LENGTH: usize = 5;

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern is valid")
});

/// Checks every rule and returns the violations in rule order
///
/// An empty result means the input is acceptable.
pub fn validate_account_input(input: &AccountInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !validators::min_chars(&input.username, MIN_USERNAME_LENGTH) {
        errors.add_error(
            "username",
            format!("Username must be at least {} characters", MIN_USERNAME_LENGTH),
            "too_short",
        );
    }

    if !ALPHANUMERIC.is_match(&input.username) {
        errors.add_error(
            "username",
            "Username contains non alphanumeric characters - not allowed.",
            "not_alphanumeric",
        );
    }

    if !validators::not_empty(&input.password) {
        errors.add_error("password", "Password is required", "required");
    }

    if !input.email.validate_email() {
        errors.add_error("email", "Email does not appear to be valid", "invalid_email");
    }

    errors
}
