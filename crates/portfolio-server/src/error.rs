//! HTTP error responses

use crate::extractors::PageContext;
use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use portfolio_core::PortfolioError;
use std::any::Any;
use thiserror::Error;

/// Errors a handler can return.
///
/// All of them render the home page with a 500 status; the cause only goes
/// to the log.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Store(#[from] PortfolioError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        server_error_page()
    }
}

/// Home page with a 500 status.
pub fn server_error_page() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::home(&PageContext::now())),
    )
        .into_response()
}

/// Response for a handler that panicked, used by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);
    server_error_page()
}
