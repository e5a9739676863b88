//! Application state shared across handlers

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;
use crate::db::SharedPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: SharedPool,
    request_timeout: Duration,
    start_time: Instant,
}

impl AppState {
    pub fn new(db: SharedPool, request_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                request_timeout,
                start_time: Instant::now(),
            }),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            SharedPool::new(config.database_url.clone(), config.max_connections),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn db(&self) -> &SharedPool {
        &self.inner.db
    }

    /// Upper bound on how long the page may wait for the database.
    pub fn request_timeout(&self) -> Duration {
        self.inner.request_timeout
    }

    pub fn uptime(&self) -> Duration {
        self.inner.start_time.elapsed()
    }
}
