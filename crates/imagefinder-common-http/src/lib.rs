// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction.
//!
//! Every outbound client goes through [`builder`] so upstream APIs see a
//! consistent `User-Agent`.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Returns the standard User-Agent string, `imagefinder/{version}`.
pub fn user_agent() -> String {
	format!("imagefinder/{}", env!("CARGO_PKG_VERSION"))
}

/// Creates a client builder with the standard User-Agent header.
///
/// ```ignore
/// let client = imagefinder_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and reqwest's defaults, which
/// include no request timeout.
pub fn client() -> reqwest::Result<Client> {
	builder().build()
}

/// Builds a client with the standard User-Agent and the given request timeout.
pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	builder().timeout(timeout).build()
}
