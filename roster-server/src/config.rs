//! Server configuration - bind address, database location, timeouts
//!
//! Values are normally assembled by the `roster` binary from flags and
//! environment variables:
//! - `DATABASE_URL`: SQLite location (default: `file:./dev.db`). Relative
//!   paths resolve against the working directory, not the directory of an
//!   ORM schema file, so an `.env` written for ORM tooling may need adjusting.
//! - `PORT`: listen port (default: 3000)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use crate::error::PageError;

/// Default maximum connections for the shared pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default database location, matching what ORM tooling generates.
pub const DEFAULT_DATABASE_URL: &str = "file:./dev.db";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Where the SQLite database lives
    pub database_url: DatabaseUrl,

    /// Seconds the page waits for the database before failing the request
    pub timeout_secs: u64,

    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: DatabaseUrl::from_path("./dev.db"),
            timeout_secs: 30,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Location of the SQLite database file.
///
/// Accepts `file:<path>`, `file://<path>`, `sqlite:<path>`, `sqlite://<path>`
/// or a bare path.
/// Anything after `?` is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    path: PathBuf,
}

impl DatabaseUrl {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Connection options for the read path. The file is never created.
    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(false)
    }
}

impl FromStr for DatabaseUrl {
    type Err = PageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let without_query = trimmed.split('?').next().unwrap_or_default();

        let path = ["sqlite://", "sqlite:", "file://", "file:"]
            .iter()
            .find_map(|prefix| without_query.strip_prefix(prefix))
            .unwrap_or(without_query);

        if path.is_empty() {
            return Err(PageError::Config(format!(
                "database url '{raw}' does not name a file"
            )));
        }

        Ok(Self::from_path(path))
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sqlite://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.database_url.path(), Path::new("./dev.db"));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn parses_orm_style_url() {
        let url: DatabaseUrl = "file:./dev.db".parse().unwrap();
        assert_eq!(url.path(), Path::new("./dev.db"));
    }

    #[test]
    fn parses_sqlite_urls() {
        let url: DatabaseUrl = "sqlite:///var/lib/roster/app.db".parse().unwrap();
        assert_eq!(url.path(), Path::new("/var/lib/roster/app.db"));

        let url: DatabaseUrl = "sqlite:data.db".parse().unwrap();
        assert_eq!(url.path(), Path::new("data.db"));
    }

    #[test]
    fn parses_file_urls_with_authority() {
        let url: DatabaseUrl = "file:///tmp/x.db".parse().unwrap();
        assert_eq!(url.path(), Path::new("/tmp/x.db"));
    }

    #[test]
    fn parses_relative_sqlite_url() {
        let url: DatabaseUrl = "sqlite://relative.db".parse().unwrap();
        assert_eq!(url.path(), Path::new("relative.db"));
    }

    #[test]
    fn bare_path_and_query_suffix() {
        let url: DatabaseUrl = " prisma/dev.db?connection_limit=1 ".parse().unwrap();
        assert_eq!(url.path(), Path::new("prisma/dev.db"));
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            "file:".parse::<DatabaseUrl>(),
            Err(PageError::Config(_))
        ));
        assert!("".parse::<DatabaseUrl>().is_err());
    }

    #[test]
    fn display_uses_sqlite_scheme() {
        let url = DatabaseUrl::from_path("dev.db");
        assert_eq!(url.to_string(), "sqlite://dev.db");
    }
}
