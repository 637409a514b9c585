// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search page HTTP handlers.

use axum::{
	extract::{rejection::FormRejection, State},
	http::Method,
	response::Html,
	Form,
};

use crate::{
	api::AppState, error::ServerError, render::render_search_page, search_form::handle_search,
	search_form::SearchForm,
};

/// GET / - Render the empty search form.
pub async fn search_page(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
	let page = handle_search(&Method::GET, None, state.search_client.as_ref()).await?;
	Ok(Html(render_search_page(&page)))
}

/// POST / - Search Pexels for the submitted query.
///
/// A body that is not a urlencoded form counts as a missing query.
#[axum::debug_handler]
pub async fn submit_search(
	State(state): State<AppState>,
	form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Html<String>, ServerError> {
	let form = match form {
		Ok(Form(form)) => Some(form),
		Err(rejection) => {
			tracing::debug!(error = %rejection, "search: unreadable form body");
			None
		}
	};
	let page = handle_search(&Method::POST, form, state.search_client.as_ref()).await?;
	Ok(Html(render_search_page(&page)))
}
