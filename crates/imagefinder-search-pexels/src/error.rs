// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Pexels API client.

use thiserror::Error;

/// Errors that can occur when searching Pexels.
#[derive(Debug, Error)]
pub enum PexelsError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[source] reqwest::Error),

	/// The local HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	Build(#[source] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Pexels answered with a non-2xx status.
	#[error("Pexels API error: {status} - {body}")]
	Http { status: u16, body: String },

	/// The response body did not match the expected `photos` schema.
	#[error("Invalid response from Pexels: {0}")]
	Parse(String),
}

impl PexelsError {
	/// Upstream HTTP status, if the failure came from a non-2xx response.
	pub fn status(&self) -> Option<u16> {
		match self {
			PexelsError::Http { status, .. } => Some(*status),
			_ => None,
		}
	}
}
