//! Error types for roster-server
//!
//! Every failure in the page handler ends up here and is turned into a
//! generic 500 page. Causes are logged, never shown to the client.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::render;

pub type PageResult<T> = Result<T, PageError>;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database did not answer within {0:?}")]
    Timeout(std::time::Duration),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, render::NO_STORE)],
            Html(render::error_page()),
        )
            .into_response()
    }
}
