// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::messages::{validation_message, USER_ALREADY_REGISTERED};
use crate::api::RegisterApi;
use crate::error::RegisterError;
use signup_shared::messages::register::RegisterRequest;
use signup_shared::validation::{validate_registration, ValidationFailure};

/// Values read from the form's inputs when it's submitted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationInput {
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

/// Where the controller presents submission state
pub trait FormView {
	/// Message for the last failure; empty when there's nothing to show
	fn set_error(&self, message: &str);
	/// Whether a registration request is in flight
	fn set_loading(&self, loading: bool);
	/// Whether the last registration request succeeded
	fn set_success(&self, success: bool);
}

pub trait Navigator {
	fn navigate(&self, route: &str);
}

/// How a single submission ended
#[derive(Debug)]
pub enum SubmissionOutcome {
	/// Local checks failed; no request was sent. Failures are listed in the order the checks ran.
	Invalid(Vec<ValidationFailure>),
	Succeeded,
	Failed(RegisterError),
}

/// Runs the submission lifecycle of the registration form.
///
/// One submission goes through validation, then (if the data passes) a single registration request. Every outcome
/// ends in an update to the form view; nothing is retried, and a request that's already in flight is never cancelled.
pub struct RegistrationFormController<A, N, V> {
	api: A,
	navigator: N,
	view: V,
	success_route: String,
}

impl<A: RegisterApi, N: Navigator, V: FormView> RegistrationFormController<A, N, V> {
	pub fn new(api: A, navigator: N, view: V, success_route: impl Into<String>) -> Self {
		Self {
			api,
			navigator,
			view,
			success_route: success_route.into(),
		}
	}

	pub async fn submit(&self, input: RegistrationInput) -> SubmissionOutcome {
		log::debug!("Registration form submitted");

		let failures = validate_registration(&input.email, &input.password, &input.confirm_password);
		if let Some(last_failure) = failures.last() {
			log::debug!("Registration data failed validation: {:?}", failures);
			self.view.set_error(validation_message(*last_failure));
			self.view.set_loading(false);
			self.view.set_success(false);
			return SubmissionOutcome::Invalid(failures);
		}

		self.view.set_loading(true);
		self.view.set_error("");

		let request = RegisterRequest {
			email: input.email,
			password: input.password,
			password2: input.confirm_password,
		};

		match self.api.register(&request).await {
			Ok(_) => {
				log::info!("Registration succeeded");
				self.view.set_loading(false);
				self.view.set_success(true);
				// Navigating can tear down the view's scope, so it must be the last thing touching it.
				self.navigator.navigate(&self.success_route);
				SubmissionOutcome::Succeeded
			}
			Err(error) => {
				log::warn!("Registration failed: {}", error);
				self.view.set_error(&failure_message(&error));
				self.view.set_loading(false);
				self.view.set_success(false);
				SubmissionOutcome::Failed(error)
			}
		}
	}
}

/// Picks the message to show for a failed registration request.
///
/// The "user already exists" error gets a friendlier message, other server messages are shown as-is, and anything
/// else falls back to the error's own description.
pub fn failure_message(error: &RegisterError) -> String {
	if error.is_user_exists() {
		return String::from(USER_ALREADY_REGISTERED);
	}
	match error.server_message() {
		Some(message) => String::from(message),
		None => error.to_string(),
	}
}
