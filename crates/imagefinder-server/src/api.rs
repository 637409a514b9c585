// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use imagefinder_search_pexels::{ImageSearchClient, PexelsClient, PexelsError};
use imagefinder_server_config::ServerConfig;

use crate::routes;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
	pub search_client: Arc<dyn ImageSearchClient>,
	pub pexels_configured: bool,
}

impl AppState {
	pub fn new(search_client: Arc<dyn ImageSearchClient>, pexels_configured: bool) -> Self {
		Self {
			search_client,
			pexels_configured,
		}
	}
}

/// Builds the Pexels client from configuration.
///
/// A missing API key yields a client that sends an empty credential. Without
/// `timeout_secs` the client waits on the upstream indefinitely.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, PexelsError> {
	let api_key = config.pexels.api_key.clone().unwrap_or_default();
	let client = match config.pexels.timeout_secs {
		Some(secs) => PexelsClient::with_timeout(api_key, Duration::from_secs(secs))?,
		None => PexelsClient::new(api_key)?,
	}
	.with_base_url(config.pexels.base_url.clone());

	tracing::info!(
		base_url = %client.base_url(),
		timeout = ?client.timeout(),
		"Pexels client created"
	);

	Ok(AppState::new(Arc::new(client), config.pexels.is_configured()))
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route(
			"/",
			get(routes::search::search_page).post(routes::search::submit_search),
		)
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}
