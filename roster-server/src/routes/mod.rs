//! Route handlers
//!
//! - page: the user listing at `/`
//! - health: liveness check

pub mod health;
pub mod page;
