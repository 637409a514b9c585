// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each has a resolved `*Config` and a mergeable
//! `*ConfigLayer`.

mod http;
mod logging;
mod pexels;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use pexels::{PexelsConfig, PexelsConfigLayer};
