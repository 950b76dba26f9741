// src/main.rs

use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use emberlog::api::http::app_router;
use emberlog::config::CONFIG;
use emberlog::llm::{GeminiClient, StarryClient};
use emberlog::state::AppState;

#[derive(Parser)]
#[command(name = "emberlog", about = "AI proxy backend for the emberlog mood journal")]
struct Args {
    /// Bind host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting emberlog proxy backend");
    info!("Text model: {}", CONFIG.gemini_model);

    let text = Arc::new(GeminiClient::from_env()?);
    let artwork = Arc::new(StarryClient::from_env()?);
    let app_state = Arc::new(AppState::new(text, artwork));

    let app = app_router(app_state);

    let host = args.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = args.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Listening on http://{}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
