// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! imagefinder web server.
//!
//! Serves a single search form. A submitted query is sent to Pexels and the
//! returned photos are rendered as a list of thumbnails.

pub mod api;
pub mod error;
pub mod render;
pub mod routes;
pub mod search_form;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use imagefinder_server_config::ServerConfig;
pub use search_form::{handle_search, SearchForm, SearchPage, ValidationError};
