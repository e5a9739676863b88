//! User repository
//!
//! A single read: every row, no filter, no sort, no pagination. Row order is
//! whatever SQLite returns.

use sqlx::SqlitePool;

use crate::models::User;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch all users.
    pub async fn find_many(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(r#"SELECT id, name, email FROM "user""#)
            .fetch_all(self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    async fn memory_pool() -> SqlitePool {
        let options: SqliteConnectOptions = "sqlite::memory:".parse().unwrap();
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn empty_table_is_not_an_error() {
        let pool = memory_pool().await;
        sqlx::query("CREATE TABLE user (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();

        let users = UserRepo::new(&pool).find_many().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn returns_every_row() {
        let pool = memory_pool().await;
        sqlx::query("CREATE TABLE user (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO user (id, name, email) VALUES (1, 'Alice', 'alice@example.com'), (2, 'Bob', 'bob@example.com')")
            .execute(&pool)
            .await
            .unwrap();

        let mut users = UserRepo::new(&pool).find_many().await.unwrap();
        users.sort_by_key(|u| u.id);
        assert_eq!(
            users,
            vec![
                User { id: 1, name: "Alice".into(), email: "alice@example.com".into() },
                User { id: 2, name: "Bob".into(), email: "bob@example.com".into() },
            ]
        );
    }

    #[tokio::test]
    async fn orm_style_table_name_matches() {
        let pool = memory_pool().await;
        sqlx::query(r#"CREATE TABLE "User" (id INTEGER PRIMARY KEY AUTOINCREMENT, email TEXT NOT NULL UNIQUE, name TEXT NOT NULL)"#)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(r#"INSERT INTO "User" (email, name) VALUES ('dewi@example.com', 'Dewi')"#)
            .execute(&pool)
            .await
            .unwrap();

        let users = UserRepo::new(&pool).find_many().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Dewi");
    }

    #[tokio::test]
    async fn missing_table_is_a_query_error() {
        let pool = memory_pool().await;
        assert!(UserRepo::new(&pool).find_many().await.is_err());
    }
}
