// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RegisterError;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use signup_shared::messages::register::{RegisterRequest, RegisterResponse};

/// Something that can carry a registration request to the server
pub trait RegisterApi {
	fn register<'a>(
		&'a self,
		request: &'a RegisterRequest,
	) -> LocalBoxFuture<'a, Result<RegisterResponse, RegisterError>>;
}

/// Sends registration requests as JSON over HTTP
pub struct HttpRegisterApi {
	endpoint: String,
}

impl HttpRegisterApi {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}
}

impl RegisterApi for HttpRegisterApi {
	fn register<'a>(
		&'a self,
		request: &'a RegisterRequest,
	) -> LocalBoxFuture<'a, Result<RegisterResponse, RegisterError>> {
		async move {
			let response = Request::post(&self.endpoint).json(request)?.send().await?;
			let status = response.status();

			if response.ok() {
				// Success is decided by the status; the body has no fields we depend on.
				let body = match response.json::<RegisterResponse>().await {
					Ok(body) => body,
					Err(error) => {
						log::warn!("Registration succeeded with an unreadable response body: {}", error);
						RegisterResponse::default()
					}
				};
				return Ok(body);
			}

			let message = match response.json::<RegisterResponse>().await {
				Ok(body) => body.error,
				Err(error) => {
					log::debug!("Failed to read registration error body (status {}): {}", status, error);
					None
				}
			};
			Err(RegisterError::Server { status, message })
		}
		.boxed_local()
	}
}
