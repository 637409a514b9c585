// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use imagefinder_search_pexels::PexelsError;
use serde::Serialize;

/// Errors that abort a request.
///
/// Validation failures are not represented here: an empty query degrades to
/// an empty result page instead of failing the request.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// The image search client failed.
	#[error("Search error: {0}")]
	Search(#[from] PexelsError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ErrorResponse {
	fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, body) = match &self {
			ServerError::Search(PexelsError::Http { status, body }) => {
				tracing::warn!(upstream_status = status, body = %body, "upstream error");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse::new(
						"upstream_error",
						format!("Pexels returned HTTP {status}"),
					),
				)
			}
			ServerError::Search(PexelsError::Parse(msg)) => {
				tracing::warn!(error = %msg, "upstream returned malformed response");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse::new("upstream_error", format!("Invalid Pexels response: {msg}")),
				)
			}
			ServerError::Search(PexelsError::Timeout) => {
				tracing::warn!("upstream timeout");
				(
					StatusCode::GATEWAY_TIMEOUT,
					ErrorResponse::new("upstream_timeout", "Pexels request timed out"),
				)
			}
			ServerError::Search(PexelsError::Network(e)) => {
				tracing::error!(error = %e, "failed to contact upstream");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse::new("upstream_error", "Failed to contact Pexels"),
				)
			}
			ServerError::Search(PexelsError::Build(e)) => {
				tracing::error!(error = %e, "search client misconfigured");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("internal_error", "An internal error occurred"),
				)
			}
		};

		(status, Json(body)).into_response()
	}
}
