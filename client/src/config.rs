// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Locations the registration form works with.
///
/// All paths are relative to wherever the application is hosted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormConfig {
	/// Endpoint the registration request is posted to
	pub register_endpoint: String,
	/// Route to navigate to once registration succeeds
	pub success_route: String,
	/// Route the "go to login" link points to
	pub login_route: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			register_endpoint: String::from("/api/register"),
			success_route: String::from("/"),
			login_route: String::from("/login"),
		}
	}
}
