//! MLB Chat - Entry Point
//!
//! Answers a single question given on the command line, or runs an
//! interactive prompt until `quit`.

use clap::Parser;
use mlb_chat::api::client::MlbClient;
use mlb_chat::command::router::QuestionRouter;
use mlb_chat::core::config::ChatConfig;
use mlb_chat::core::error::Result;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Ask MLB questions from the terminal
#[derive(Parser, Debug)]
#[command(name = "mlb-chat")]
#[command(about = "Answer baseball questions using the MLB Stats API")]
struct Args {
    /// TOML config file (defaults apply when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Question to answer; starts an interactive prompt when omitted
    question: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mlb_chat=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ChatConfig::load(args.config.as_deref())?;
    tracing::info!(api = %config.api_base_url, season = config.season, "MLB Chat starting...");

    let rt = Runtime::new()?;
    let client = MlbClient::new(&config)?;
    let router = QuestionRouter::new(Arc::new(client), Arc::new(config));

    if !args.question.is_empty() {
        let question = args.question.join(" ");
        println!("{}", rt.block_on(router.route_question(&question)));
        return Ok(());
    }

    println!("\n=== MLB CHAT ===");
    println!("Ask about players, leaders, injuries, trades, pitchers or scores.");
    println!("Type quit / q to exit.");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        let answer = rt.block_on(router.route_question(input));
        println!("{}\n", answer);
    }

    tracing::info!("MLB Chat shutting down");
    Ok(())
}
