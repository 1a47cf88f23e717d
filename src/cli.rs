use crate::app::App;
use crate::config::{self, Config};
use crate::llm::GeminiClient;
use crate::search::providers::GeminiSearchClient;
use crate::web::{self, AppState};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "start341", version, about = "AI-powered search start page")]
pub struct Args {
    /// Config file (default: <config dir>/start341/config.toml)
    #[arg(long, env = "START341_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to serve the page on, overrides `server.bind`
    #[arg(long, env = "START341_BIND")]
    pub bind: Option<String>,

    /// Write debug logs to a file
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Layer command-line flags over the file configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if self.debug {
            config.debug = true;
        }
    }
}

/// Parse arguments, load configuration and serve until shutdown
pub async fn run() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    let mut config = config::load_or_create_config(&config_path)?;
    args.apply(&mut config);

    let _log_guard = crate::logging::init(&config)?;

    // No credential, no server
    let api_key = config::api_key_from_env()?;

    let client = GeminiSearchClient::new(GeminiClient::new(config.model.clone(), api_key));
    let state = AppState::new(App::new(Arc::new(client)));

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    tracing::info!(
        bind = %config.server.bind,
        model = %config.model.model,
        config = %config_path.display(),
        "serving start341"
    );

    axum::serve(listener, web::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
