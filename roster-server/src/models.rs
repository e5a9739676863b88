//! Records read from the database

use sqlx::FromRow;

/// A row of the `user` relation.
///
/// Owned by whatever seeds the database; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
