// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FormConfig;
use sycamore::prelude::*;

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating home page");

	let config: &FormConfig = use_context(ctx);
	let login_route = config.login_route.clone();

	view! {
		ctx,
		div(id="home") {
			h1 { "Bem-vindo!" }
			p {
				a(href="/register") { "Criar uma conta" }
			}
			p {
				a(href=login_route) { "Ir para o login" }
			}
		}
	}
}
