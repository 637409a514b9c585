// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pexels photo search API client.
//!
//! Turns a free-text query into a list of [`ImageResult`] records. The
//! [`ImageSearchClient`] trait is the seam the server depends on, so handlers
//! can be exercised without network access.

pub mod client;
pub mod error;
pub mod search;
pub mod types;

pub use client::{PexelsClient, DEFAULT_BASE_URL};
pub use error::PexelsError;
pub use search::ImageSearchClient;
pub use types::ImageResult;
