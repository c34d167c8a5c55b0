// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Verity fact-check server binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verity_server::{create_app_state, create_router};

/// Verity server - fact-check backend over NewsAPI and Groq.
#[derive(Parser, Debug)]
#[command(name = "verity-server", about = "Verity fact-check server", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/verity/server.toml)
	#[arg(long)]
	config: Option<PathBuf>,

	/// Subcommands for verity-server (e.g., `version`)
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
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("verity-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = match args.config {
		Some(path) => verity_server_config::load_config_with_file(path)?,
		None => verity_server_config::load_config()?,
	};

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		news_configured = config.news.is_configured(),
		llm_configured = config.llm.is_configured(),
		"starting verity-server"
	);

	let state = create_app_state(&config);

	// Permissive CORS, matching the browser-facing frontend
	let cors = CorsLayer::new()
		.allow_origin(Any)
		.allow_methods(Any)
		.allow_headers(Any);

	let app = create_router(state, &config.paths)
		.layer(cors)
		.layer(TraceLayer::new_for_http());

	let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
	tracing::info!("Server running on http://{}", listener.local_addr()?);

	axum::serve(listener, app.into_make_service()).await?;

	Ok(())
}
