//! roster CLI - serves the user listing page
//!
//! - `serve`: run the HTTP server
//! - `check`: verify the database and user table are readable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod server;
mod tracing_setup;

use server::{CheckArgs, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "Server-rendered user listing backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Run the listing query once and report how many users were found
    Check(CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => server::run_serve(args).await?,
        Commands::Check(args) => server::run_check(args).await?,
    }

    Ok(())
}
