// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pexels API client implementation.

use std::time::Duration;

use imagefinder_common_secret::SecretString;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::PexelsError;
use crate::types::ImageResult;

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/search";

/// Client for the Pexels photo search endpoint.
#[derive(Debug, Clone)]
pub struct PexelsClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
	timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct PexelsApiResponse {
	photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
	url: String,
	src: PexelsPhotoSrc,
	photographer: String,
}

#[derive(Debug, Deserialize)]
struct PexelsPhotoSrc {
	tiny: String,
}

impl From<PexelsPhoto> for ImageResult {
	fn from(photo: PexelsPhoto) -> Self {
		ImageResult {
			url: photo.url,
			preview_url: photo.src.tiny,
			photographer: photo.photographer,
		}
	}
}

impl PexelsClient {
	/// Creates a client that authenticates with `api_key`.
	///
	/// An empty key is accepted; Pexels will answer 401, which surfaces as
	/// [`PexelsError::Http`].
	///
	/// No request timeout is set; a slow upstream is waited on.
	pub fn new(api_key: SecretString) -> Result<Self, PexelsError> {
		let http_client = imagefinder_common_http::client().map_err(PexelsError::Build)?;
		Ok(Self::from_parts(http_client, api_key, None))
	}

	/// Creates a client whose requests fail with [`PexelsError::Timeout`]
	/// after `timeout`.
	pub fn with_timeout(api_key: SecretString, timeout: Duration) -> Result<Self, PexelsError> {
		let http_client =
			imagefinder_common_http::client_with_timeout(timeout).map_err(PexelsError::Build)?;
		Ok(Self::from_parts(http_client, api_key, Some(timeout)))
	}

	fn from_parts(http_client: Client, api_key: SecretString, timeout: Option<Duration>) -> Self {
		Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout,
		}
	}

	/// Sets a custom search endpoint (used by tests and self-hosted proxies).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// The request timeout, if one was configured.
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	/// Searches Pexels for `query` and returns the first page of photos.
	///
	/// Exactly one request is sent; there is no retry and no pagination.
	#[instrument(skip(self), fields(query = %query))]
	pub async fn search(&self, query: &str) -> Result<Vec<ImageResult>, PexelsError> {
		debug!(url = %self.base_url, "Sending search request to Pexels");

		let response = self
			.http_client
			.get(&self.base_url)
			.query(&[("query", query)])
			.header(AUTHORIZATION, self.api_key.expose().as_str())
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return PexelsError::Timeout;
				}
				error!(error = %e, "Network error during Pexels request");
				PexelsError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Pexels");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Pexels API error");
			return Err(PexelsError::Http {
				status: status.as_u16(),
				body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			PexelsError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let results = parse_photos(&body)?;

		debug!(result_count = results.len(), "Search completed successfully");

		Ok(results)
	}
}

/// Maps a Pexels search response body into results, preserving order.
fn parse_photos(body: &str) -> Result<Vec<ImageResult>, PexelsError> {
	let api_response: PexelsApiResponse = serde_json::from_str(body).map_err(|e| {
		error!(error = %e, "Failed to parse Pexels response");
		PexelsError::Parse(format!("JSON parse error: {e}"))
	})?;

	Ok(api_response
		.photos
		.into_iter()
		.map(ImageResult::from)
		.collect())
}
