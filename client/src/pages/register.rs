// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpRegisterApi;
use crate::app::RouterNavigator;
use crate::config::FormConfig;
use crate::form::controller::{FormView, RegistrationFormController, RegistrationInput, SubmissionOutcome};
use crate::form::messages::{
	CONFIRM_PASSWORD_LABEL, EMAIL_LABEL, EMAIL_PLACEHOLDER, ERROR_HEADING, FORM_DESCRIPTION, FORM_TITLE, LOGIN_LINK,
	PASSWORD_LABEL, SUBMIT_LABEL, SUCCESS_HEADING, SUCCESS_MESSAGE,
};
use signup_shared::validation::ValidationFailure;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// Presents the controller's state through the page's signals
struct FormSignals<'a> {
	error: &'a Signal<String>,
	loading: &'a Signal<bool>,
	success: &'a Signal<bool>,
}

impl FormView for FormSignals<'_> {
	fn set_error(&self, message: &str) {
		self.error.set(String::from(message));
	}

	fn set_loading(&self, loading: bool) {
		self.loading.set(loading);
	}

	fn set_success(&self, success: bool) {
		self.success.set(success);
	}
}

/// Reads the current value of an input field, or an empty string if the field isn't mounted
fn input_value<G: Html>(field: &NodeRef<G>) -> String {
	match field.try_get::<DomNode>() {
		Some(node) => {
			let input: HtmlInputElement = node.unchecked_into();
			input.value()
		}
		None => String::new(),
	}
}

/// Moves keyboard focus to an input field, if it's mounted
fn focus_field<G: Html>(field: &NodeRef<G>) {
	if let Some(node) = field.try_get::<DomNode>() {
		let input: HtmlInputElement = node.unchecked_into();
		if input.focus().is_err() {
			log::debug!("Failed to focus registration form field");
		}
	}
}

fn set_page_title(title: &str) {
	if let Some(document) = web_sys::window().and_then(|window| window.document()) {
		document.set_title(title);
	}
}

#[component]
pub fn RegisterView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title(FORM_TITLE);

	let config: &FormConfig = use_context(ctx);
	let login_route = config.login_route.clone();

	let form_error = create_signal(ctx, String::new());
	let form_loading = create_signal(ctx, false);
	let form_success = create_signal(ctx, false);

	let email_field = create_node_ref(ctx);
	let password_field = create_node_ref(ctx);
	let password2_field = create_node_ref(ctx);

	let controller = create_ref(
		ctx,
		RegistrationFormController::new(
			HttpRegisterApi::new(config.register_endpoint.clone()),
			RouterNavigator,
			FormSignals {
				error: form_error,
				loading: form_loading,
				success: form_success,
			},
			config.success_route.clone(),
		),
	);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Inputs are uncontrolled; their values are only read at submission time.
		let input = RegistrationInput {
			email: input_value(email_field),
			password: input_value(password_field),
			confirm_password: input_value(password2_field),
		};

		spawn_local_scoped(ctx, async move {
			// A successful submission navigates away, so only the failure outcomes may touch the page's fields.
			match controller.submit(input).await {
				SubmissionOutcome::Invalid(failures) => {
					let field = match failures.first() {
						Some(ValidationFailure::InvalidEmail) => email_field,
						Some(ValidationFailure::PasswordTooShort) => password_field,
						Some(ValidationFailure::PasswordMismatch) | None => password2_field,
					};
					focus_field(field);
				}
				SubmissionOutcome::Failed(error) => {
					if error.is_user_exists() {
						focus_field(email_field);
					}
				}
				SubmissionOutcome::Succeeded => (),
			}
		});
	};

	view! {
		ctx,
		form(id="register_form", on:submit=form_submission_handler) {
			div(class="card") {
				div(class="card_header") {
					h1(class="card_title") { (FORM_TITLE) }
					p(class="card_description") { (FORM_DESCRIPTION) }
				}
				div(class="card_content") {
					div(class="form_field") {
						label(for="email") { (EMAIL_LABEL) }
						input(ref=email_field, id="email", type="email", placeholder=EMAIL_PLACEHOLDER, required=true)
					}
					div(class="form_field") {
						label(for="password") { (PASSWORD_LABEL) }
						input(ref=password_field, id="password", type="password", required=true)
					}
					div(class="form_field") {
						label(for="password2") { (CONFIRM_PASSWORD_LABEL) }
						input(ref=password2_field, id="password2", type="password", required=true)
					}
				}
				div(class="card_footer") {
					(
						if form_error.get().is_empty() {
							view! { ctx, }
						} else {
							let message = (*form_error.get()).clone();
							view! {
								ctx,
								div(id="register_form_error", class="form_panel form_panel_error") {
									p(class="form_panel_heading") { (ERROR_HEADING) }
									p { (message) }
								}
							}
						}
					)
					(
						if *form_success.get() {
							view! {
								ctx,
								div(id="register_form_success", class="form_panel form_panel_success") {
									p(class="form_panel_heading") { (SUCCESS_HEADING) }
									p { (SUCCESS_MESSAGE) }
								}
							}
						} else {
							view! { ctx, }
						}
					)
					button(type="submit", class="register_submit", disabled=*form_loading.get()) {
						(
							if *form_loading.get() {
								view! { ctx, span(class="loading_spinner") }
							} else {
								view! { ctx, }
							}
						)
						(SUBMIT_LABEL)
					}
					div(class="register_login_link") {
						a(href=login_route) { (LOGIN_LINK) }
					}
				}
			}
		}
	}
}
