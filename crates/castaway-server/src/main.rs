//! castaway-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds the
//! configured data source behind an expiring cache, and serves the JSON API
//! under `/api`.

use std::path::PathBuf;

use anyhow::Context as _;
use castaway_server::{ServerConfig, SourceConfig, app, expand_tilde};
use castaway_source::{CachedSource, DirSource, HttpSource};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Castaway statistics server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  let ttl = server_cfg.cache_ttl();

  let app = match &server_cfg.source {
    SourceConfig::Http(http) => {
      tracing::info!(contestants = %http.contestants_url, "reading tables over HTTP");
      let source = HttpSource::new(http.clone()).context("failed to build HTTP client")?;
      app(CachedSource::with_ttl(source, ttl), &server_cfg)
    }
    SourceConfig::Dir { path } => {
      let path = expand_tilde(path);
      tracing::info!(path = %path.display(), "reading tables from disk");
      app(CachedSource::with_ttl(DirSource::new(path), ttl), &server_cfg)
    }
  };

  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
