// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Types returned by the Pexels client.

use serde::{Deserialize, Serialize};

/// A single displayable photo from a search.
///
/// All three fields always come from the same upstream photo object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
	/// Canonical Pexels page for the photo.
	pub url: String,
	/// Thumbnail image (`src.tiny` upstream).
	pub preview_url: String,
	pub photographer: String,
}

impl ImageResult {
	pub fn new(
		url: impl Into<String>,
		preview_url: impl Into<String>,
		photographer: impl Into<String>,
	) -> Self {
		Self {
			url: url.into(),
			preview_url: preview_url.into(),
			photographer: photographer.into(),
		}
	}
}
