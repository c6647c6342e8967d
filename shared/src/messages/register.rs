// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Error value the registration endpoint sends when the email address already has an account
pub const USER_EXISTS_ERROR: &str = "user already exists";

/// Data from the client when trying to register an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterRequest {
	pub email: String,
	pub password: String,
	/// The password confirmation, as entered by the user
	pub password2: String,
}

/// Response body from the registration endpoint.
///
/// Only the error is part of the contract; anything else the server sends is ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl RegisterResponse {
	/// Whether the server reported that the email address is already registered
	pub fn is_user_exists(&self) -> bool {
		self.error.as_deref() == Some(USER_EXISTS_ERROR)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn request_uses_wire_field_names() {
		let request = RegisterRequest {
			email: String::from("user@example.com"),
			password: String::from("longenough1"),
			password2: String::from("longenough1"),
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			json!({ "email": "user@example.com", "password": "longenough1", "password2": "longenough1" })
		);
	}

	#[test]
	fn response_ignores_unknown_fields() {
		let response: RegisterResponse = serde_json::from_str(r#"{"success": true, "id": 12}"#).unwrap();
		assert_eq!(response, RegisterResponse::default());
	}

	#[test]
	fn response_reads_error() {
		let response: RegisterResponse = serde_json::from_str(r#"{"error": "user already exists"}"#).unwrap();
		assert!(response.is_user_exists());

		let response: RegisterResponse = serde_json::from_str(r#"{"error": "something else"}"#).unwrap();
		assert!(!response.is_user_exists());
		assert_eq!(response.error.as_deref(), Some("something else"));
	}

	#[test]
	fn empty_response_serializes_without_error() {
		assert_eq!(serde_json::to_string(&RegisterResponse::default()).unwrap(), "{}");
	}
}
