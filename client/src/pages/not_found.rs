// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[component]
pub fn NotFoundView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating fallback page for unknown location");

	view! {
		ctx,
		h1 { "Página não encontrada" }
		p { "Esse endereço não existe nesta aplicação." }
		p {
			a(href="/") {
				"Voltar para a página inicial"
			}
		}
	}
}
