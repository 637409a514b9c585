// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pexels search provider configuration section.

use imagefinder_common_config::SecretString;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PexelsConfigLayer {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl PexelsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> PexelsConfig {
		PexelsConfig {
			api_key: self.api_key,
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs,
		}
	}
}

#[derive(Debug, Clone)]
pub struct PexelsConfig {
	pub api_key: Option<SecretString>,
	pub base_url: String,
	/// Outbound request timeout. `None` leaves reqwest's default of no timeout.
	pub timeout_secs: Option<u64>,
}

impl Default for PexelsConfig {
	fn default() -> Self {
		PexelsConfigLayer::default().finalize()
	}
}

impl PexelsConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.as_ref().is_some_and(|k| !k.is_empty())
	}
}
