//! Database layer - shared connection pool and the user repository
//!
//! The page only ever reads. There is no schema management here: the
//! `user` table is created and migrated by external tooling.

pub mod pool;
pub mod users;

pub use pool::{create_pool, SharedPool};
pub use users::UserRepo;
