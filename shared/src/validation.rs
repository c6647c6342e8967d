// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-side checks run on registration data before it's sent.
//!
//! These only exist to give quick feedback; the server still validates everything it receives.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LENGTH: usize = 8;

const EMAIL_PATTERN: &str = r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
	// The pattern is a constant, so compilation can only fail if it was edited into something invalid.
	EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email pattern"))
}

/// A single rule that registration data failed
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidationFailure {
	InvalidEmail,
	PasswordTooShort,
	PasswordMismatch,
}

impl fmt::Display for ValidationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidEmail => write!(f, "The email address is not valid"),
			Self::PasswordTooShort => write!(f, "The password is shorter than {} characters", PASSWORD_MIN_LENGTH),
			Self::PasswordMismatch => write!(f, "The passwords do not match"),
		}
	}
}

/// Checks an email address against a simplified RFC 5322 address pattern.
///
/// Only lowercase letters are accepted; an address with uppercase letters is rejected rather than normalized.
pub fn is_valid_email(email: &str) -> bool {
	email_regex().is_match(email)
}

/// Checks that the password is at least [`PASSWORD_MIN_LENGTH`] characters long
pub fn is_long_enough(password: &str) -> bool {
	password.chars().count() >= PASSWORD_MIN_LENGTH
}

/// Runs every registration check and returns the failures in the order the checks ran.
///
/// Checks don't stop at the first failure, so the result can contain several entries. An empty list means the
/// data passed.
pub fn validate_registration(email: &str, password: &str, confirm_password: &str) -> Vec<ValidationFailure> {
	let mut failures = Vec::new();

	if !is_valid_email(email) {
		failures.push(ValidationFailure::InvalidEmail);
	}
	if !is_long_enough(password) {
		failures.push(ValidationFailure::PasswordTooShort);
	}
	if password != confirm_password {
		failures.push(ValidationFailure::PasswordMismatch);
	}

	failures
}
