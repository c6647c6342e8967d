// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FormConfig;
use crate::form::controller::Navigator;
use crate::pages::home::HomeView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegisterView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoutes {
	#[to("/")]
	Home,
	#[to("/register")]
	Register,
	#[not_found]
	NotFound,
}

/// Moves the application to another route through the router's history integration
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	fn navigate(&self, route: &str) {
		log::debug!("Navigating to {}", route);
		sycamore_router::navigate(route);
	}
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	provide_context(ctx, FormConfig::default());

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					(match route.get().as_ref() {
						AppRoutes::Home => view! { ctx, HomeView {} },
						AppRoutes::Register => view! { ctx, RegisterView {} },
						AppRoutes::NotFound => view! { ctx, NotFoundView {} }
					})
				}
			}
		)
	}
}
