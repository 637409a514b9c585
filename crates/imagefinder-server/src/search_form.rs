// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The search form and the submission handler behind it.

use axum::http::Method;
use imagefinder_search_pexels::{ImageResult, ImageSearchClient};
use serde::Deserialize;

use crate::error::ServerError;

/// Form data posted by the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchForm {
	#[serde(default)]
	pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("This field is required.")]
	MissingQuery,
}

impl SearchForm {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: Some(query.into()),
		}
	}

	/// Returns the trimmed query, or an error when it is missing or blank.
	pub fn validate(&self) -> Result<&str, ValidationError> {
		match self.query.as_deref().map(str::trim) {
			Some(query) if !query.is_empty() => Ok(query),
			_ => Err(ValidationError::MissingQuery),
		}
	}
}

/// Everything the search page needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
	/// The form as submitted, echoed back into the input field.
	pub form: SearchForm,
	pub images: Vec<ImageResult>,
	pub errors: Vec<String>,
}

/// Handles a request to the search page.
///
/// Only a `POST` with a non-blank query reaches the search client, and then
/// exactly once. Any other method renders an empty page; a blank submission
/// renders an empty page carrying the validation message. Search failures
/// are returned to the caller.
pub async fn handle_search(
	method: &Method,
	form: Option<SearchForm>,
	client: &dyn ImageSearchClient,
) -> Result<SearchPage, ServerError> {
	if *method != Method::POST {
		return Ok(SearchPage::default());
	}

	let form = form.unwrap_or_default();
	let query = match form.validate() {
		Ok(query) => query.to_string(),
		Err(e) => {
			tracing::debug!(error = %e, "search: rejected submission");
			return Ok(SearchPage {
				form,
				images: Vec::new(),
				errors: vec![e.to_string()],
			});
		}
	};

	let images = client.search(&query).await?;

	tracing::info!(
		query = %query,
		results_count = images.len(),
		"search: returning results"
	);

	Ok(SearchPage {
		form,
		images,
		errors: Vec::new(),
	})
}
