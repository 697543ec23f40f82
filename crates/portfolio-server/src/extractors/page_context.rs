//! Per-request view context

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{Datelike, Local};
use std::convert::Infallible;

/// Values every rendered page can use, computed fresh for each request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub current_year: i32,
}

impl PageContext {
    pub fn now() -> Self {
        Self {
            current_year: Local::now().year(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::now())
    }
}
