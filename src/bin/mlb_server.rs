//! HTTP server for MLB Chat
//!
//! Serves the question router over `/ask?q=...`.

use clap::Parser;
use mlb_chat::api::client::MlbClient;
use mlb_chat::command::router::QuestionRouter;
use mlb_chat::core::config::ChatConfig;
use mlb_chat::core::error::Result;
use mlb_chat::server::{create_chat_router, AppState};

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// MLB Chat HTTP server
#[derive(Parser, Debug)]
#[command(name = "mlb_server")]
#[command(about = "Serve MLB Chat answers over HTTP")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,

    /// TOML config file (defaults apply when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mlb_chat=info")),
        )
        .init();

    let config = ChatConfig::load(args.config.as_deref())?;
    let client = MlbClient::new(&config)?;
    let router = QuestionRouter::new(Arc::new(client), Arc::new(config));
    let app = create_chat_router(AppState::new(router));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!(addr = %args.bind, "MLB Chat server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
