use anyhow::Context;
use clap::Parser;
use hotmart_relay::app::config::{Config, FileConfig};
use hotmart_relay::{build_router, AppState};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hotmart-relay", version, about = "Webhook e relay OAuth da Hotmart")]
struct Cli {
    /// Arquivo TOML opcional com a configuração
    #[arg(short, long, env = "HOTMART_CONFIG")]
    config: Option<PathBuf>,

    /// Sobrescreve HOST
    #[arg(long)]
    host: Option<String>,

    /// Sobrescreve PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hotmart_relay=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let mut config = Config::with_env(file)?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }

    info!(
        "Starting Hotmart relay: vendas={} token={} timeout={}s",
        config.sales_file.display(),
        config.token_file.display(),
        config.http_timeout_secs
    );
    if config.webhook_token.is_none() {
        warn!("TOKEN_VALIDACAO not set; every webhook delivery will be rejected");
    }

    let addr = config.bind_addr();
    let state = AppState::new(config).context("failed to build HTTP client")?;
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
