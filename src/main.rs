use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

mod cli;
mod config;
mod server;

use config::AppConfig;
use server::AppState;

#[derive(Parser)]
#[command(name = "seolens")]
#[command(about = "SEO insights for a block of text, and keyword insertion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Port to listen on (defaults to $PORT, then 5001)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze a text read from a file or stdin
    Analyze {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Insert a keyword into a text read from a file or stdin
    Insert {
        #[arg(short, long)]
        keyword: String,
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seolens=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // Reads .env before tracing starts so RUST_LOG can come from it
    let config = AppConfig::from_env()?;
    init_tracing()?;

    for capability in config.providers.missing_credentials() {
        warn!("No credential for {}; it will fall back to its default result", capability);
    }
    let state = AppState::from_config(&config.providers)?;

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            server::serve(state, port.unwrap_or(config.port)).await?;
        }
        Commands::Analyze { file, json } => {
            let text = cli::read_input(file.as_deref())?;
            let result = state.analysis.analyze(&text).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", cli::render_analysis(&result));
            }
        }
        Commands::Insert {
            keyword,
            file,
            json,
        } => {
            let text = cli::read_input(file.as_deref())?;
            let result = state.insertion.insert_keyword(&text, &keyword).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", cli::render_insertion(&result));
            }
        }
    }

    Ok(())
}
