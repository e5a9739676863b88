//! roster-server: server-rendered user listing
//!
//! Reads every row of the `user` relation from a SQLite database and
//! renders it as an HTML page at `/`.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{DatabaseUrl, ServerConfig};
pub use error::{PageError, PageResult};
pub use models::User;
pub use server::{build_router, run_server};
pub use state::AppState;
