// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::client::PexelsClient;
use crate::error::PexelsError;
use crate::types::ImageResult;

/// Trait abstracting image search for testability.
#[async_trait]
pub trait ImageSearchClient: Send + Sync {
	/// Search for photos matching `query`, in the order the provider ranks them.
	async fn search(&self, query: &str) -> Result<Vec<ImageResult>, PexelsError>;
}

#[async_trait]
impl ImageSearchClient for PexelsClient {
	async fn search(&self, query: &str) -> Result<Vec<ImageResult>, PexelsError> {
		PexelsClient::search(self, query).await
	}
}
