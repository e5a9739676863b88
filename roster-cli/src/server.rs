use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use roster_server::config::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use roster_server::db::{create_pool, UserRepo};
use roster_server::{DatabaseUrl, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to bind the HTTP server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "ROSTER_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Seconds the page waits for the database before failing the request
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// SQLite database location (file:<path>, sqlite://<path> or a plain path)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

impl DatabaseArgs {
    fn parse_url(&self) -> Result<DatabaseUrl> {
        self.database_url
            .parse::<DatabaseUrl>()
            .with_context(|| format!("invalid database url '{}'", self.database_url))
    }
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        database_url: args.database.parse_url()?,
        timeout_secs: args.timeout,
        ..ServerConfig::default()
    };

    roster_server::run_server(config)
        .await
        .context("server terminated with an error")
}

/// Open the database and run the listing query once, without serving.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let url = args.database.parse_url()?;
    let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS)
        .await
        .with_context(|| format!("failed to open {url}"))?;

    let users = UserRepo::new(&pool)
        .find_many()
        .await
        .context("failed to read the user table")?;
    pool.close().await;

    tracing::info!(database = %url, count = users.len(), "user table readable");
    println!("{} user(s) in {}", users.len(), url);
    Ok(())
}
