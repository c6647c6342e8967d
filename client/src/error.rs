// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::messages::register::USER_EXISTS_ERROR;
use std::fmt;

/// Errors that can occur while sending a registration request
#[derive(Debug)]
pub enum RegisterError {
	/// The request couldn't be built, sent, or completed
	Transport(gloo_net::Error),
	/// The server answered with a non-success status
	Server { status: u16, message: Option<String> },
}

impl RegisterError {
	/// The error message sent by the server, if there was a non-empty one
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Server {
				message: Some(message), ..
			} if !message.is_empty() => Some(message.as_str()),
			_ => None,
		}
	}

	/// Whether the server rejected the registration because the email address already has an account
	pub fn is_user_exists(&self) -> bool {
		self.server_message() == Some(USER_EXISTS_ERROR)
	}
}

impl From<gloo_net::Error> for RegisterError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Transport(error)
	}
}

impl fmt::Display for RegisterError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "{}", error),
			Self::Server { status, .. } => write!(f, "Request failed with status code {}", status),
		}
	}
}
