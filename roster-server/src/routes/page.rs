//! Listing page - every user in the database, rendered as HTML

use std::future::Future;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{routing::get, Router};
use tracing::debug;

use crate::db::UserRepo;
use crate::error::{PageError, PageResult};
use crate::models::User;
use crate::render;
use crate::state::AppState;

/// GET /
///
/// Reads the whole `user` table on every request and never serves a cached
/// copy. A store that does not answer within the request timeout fails the
/// request like any other database error.
pub async fn list_users(State(state): State<AppState>) -> PageResult<impl IntoResponse> {
    let users = within(state.request_timeout(), load_users(&state)).await?;
    debug!(count = users.len(), "loaded users");

    Ok((
        [(header::CACHE_CONTROL, render::NO_STORE)],
        Html(render::render_page(&users)),
    ))
}

async fn load_users(state: &AppState) -> PageResult<Vec<User>> {
    let pool = state.db().get().await?;
    UserRepo::new(pool)
        .find_many()
        .await
        .map_err(PageError::Query)
}

/// Run `fut`, failing with [`PageError::Timeout`] once `limit` has passed.
async fn within<T, F>(limit: Duration, fut: F) -> PageResult<T>
where
    F: Future<Output = PageResult<T>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| PageError::Timeout(limit))?
}

/// Page routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn stalled_store_times_out() {
        let limit = Duration::from_secs(30);
        let result = within(limit, std::future::pending::<PageResult<Vec<User>>>()).await;

        assert!(matches!(result, Err(PageError::Timeout(d)) if d == limit));
    }

    #[tokio::test(start_paused = true)]
    async fn errors_inside_the_limit_pass_through() {
        let result: PageResult<()> = within(Duration::from_secs(30), async {
            Err(PageError::Config("bad url".into()))
        })
        .await;

        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_but_in_time_succeeds() {
        let result = within(Duration::from_secs(30), async {
            tokio::time::sleep(Duration::from_secs(29)).await;
            Ok::<_, PageError>(3_usize)
        })
        .await;

        assert_eq!(result.unwrap(), 3);
    }
}
