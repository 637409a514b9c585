// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! imagefinder server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use imagefinder_server::{create_app_state, create_router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// imagefinder - search Pexels stock photos from a web form.
#[derive(Parser, Debug)]
#[command(name = "imagefinder-server", about = "Pexels photo search server", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/imagefinder/server.toml)
	#[arg(long, env = "IMAGEFINDER_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("imagefinder-server version: {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => imagefinder_server_config::load_config_with_file(path)?,
		None => imagefinder_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	if !config.pexels.is_configured() {
		tracing::warn!(
			"{} is not set; Pexels will reject searches",
			imagefinder_server_config::PEXELS_API_KEY_ENV
		);
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		"starting imagefinder-server"
	);

	let state = create_app_state(&config)?;
	let app = create_router(state).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
