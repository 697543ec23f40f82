//! Static page handlers

use crate::extractors::PageContext;
use crate::views;
use axum::{http::StatusCode, response::Html};

pub async fn home(ctx: PageContext) -> Html<String> {
    Html(views::home(&ctx))
}

pub async fn about(ctx: PageContext) -> Html<String> {
    Html(views::about(&ctx))
}

pub async fn resume(ctx: PageContext) -> Html<String> {
    Html(views::resume(&ctx))
}

pub async fn thank_you(ctx: PageContext) -> Html<String> {
    Html(views::thank_you(&ctx))
}

/// Fallback for unknown routes: the home page with a 404 status.
pub async fn not_found(ctx: PageContext) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::home(&ctx)))
}
