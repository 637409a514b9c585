// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the imagefinder server.
//!
//! Layers are merged from built-in defaults, an optional TOML file and the
//! environment, in that order of increasing precedence.
//!
//! ```ignore
//! let config = imagefinder_server_config::load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, PEXELS_API_KEY_ENV,
};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub pexels: PexelsConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from defaults, `/etc/imagefinder/server.toml` and the
/// environment.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let pexels = layer.pexels.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&pexels)?;

	info!(
		host = %http.host,
		port = http.port,
		pexels_base_url = %pexels.base_url,
		pexels_configured = pexels.is_configured(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		pexels,
		logging,
	})
}

fn validate_config(pexels: &PexelsConfig) -> Result<(), ConfigError> {
	if pexels.timeout_secs == Some(0) {
		return Err(ConfigError::Validation(
			"pexels.timeout_secs must be greater than zero".to_string(),
		));
	}

	if !(pexels.base_url.starts_with("http://") || pexels.base_url.starts_with("https://")) {
		return Err(ConfigError::Validation(format!(
			"pexels.base_url must be an http(s) URL, got '{}'",
			pexels.base_url
		)));
	}

	Ok(())
}
