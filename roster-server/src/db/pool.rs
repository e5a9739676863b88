//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The pool is opened
//! lazily on the first request and then reused for the life of the process.

use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::DatabaseUrl;
use crate::error::{PageError, PageResult};

/// Create a SQLite connection pool and make sure it can hand out a connection.
///
/// # Errors
///
/// Returns an error if the database file is missing, locked or unreadable.
pub async fn create_pool(url: &DatabaseUrl, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(url.connect_options())
        .await
}

/// Process-wide pool, opened at most once.
///
/// Concurrent first callers wait on the same initialization. A failed open
/// leaves the cell empty so a later request can try again.
#[derive(Debug)]
pub struct SharedPool {
    url: DatabaseUrl,
    max_connections: u32,
    cell: OnceCell<SqlitePool>,
    inits: AtomicUsize,
}

impl SharedPool {
    pub fn new(url: DatabaseUrl, max_connections: u32) -> Self {
        Self {
            url,
            max_connections,
            cell: OnceCell::new(),
            inits: AtomicUsize::new(0),
        }
    }

    /// Get the pool, opening it if this is the first use.
    pub async fn get(&self) -> PageResult<&SqlitePool> {
        self.cell
            .get_or_try_init(|| async {
                info!(database = %self.url, "opening database");
                let pool = create_pool(&self.url, self.max_connections)
                    .await
                    .map_err(PageError::Connect)?;
                self.inits.fetch_add(1, Ordering::SeqCst);
                Ok::<_, PageError>(pool)
            })
            .await
    }

    /// Whether the pool has been opened yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of pools successfully opened so far. Never more than one.
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    pub fn url(&self) -> &DatabaseUrl {
        &self.url
    }
}
